//! Built-in household tool recommendations, grouped by category.

/// `(name, description)`
pub type ToolRow = (&'static str, &'static str);

pub const TOOL_CATEGORIES: &[(&str, &[ToolRow])] = &[
    (
        "Essentials - Driving & Fastening",
        &[
            (
                "Claw Hammer (approx. 16 oz)",
                "General purpose hammer for driving and pulling nails. Look for a comfortable grip.",
            ),
            (
                "Screwdriver Set (Phillips & Flathead)",
                "A set with various sizes of both Phillips-head (+) and flat-head (-) tips is crucial. Magnetic tips can be helpful. A multi-bit screwdriver is a good space-saving alternative.",
            ),
            (
                "Allen Wrench Set (Hex Keys)",
                "L-shaped keys for screws with hexagonal sockets, common in furniture assembly. Get both metric (mm) and standard (SAE/inch) sizes.",
            ),
            (
                "Staple Gun (Manual)",
                "Useful for light upholstery, fastening fabric, or securing thin materials to wood.",
            ),
        ],
    ),
    (
        "Essentials - Gripping & Adjusting",
        &[
            (
                "Pliers Set",
                "Should include: Slip-joint pliers (general use), Needle-nose pliers (small items/tight spaces), and Tongue-and-groove pliers (channel locks, good for plumbing/larger nuts).",
            ),
            (
                "Adjustable Wrench (Set of 2)",
                "One or two (e.g., 6-inch and 10-inch) can fit various sizes of nuts and bolts. Good for versatility.",
            ),
            (
                "Locking Pliers (Vise-Grips)",
                "Clamp onto objects securely, freeing up your hands. Excellent for gripping stripped bolt heads or holding items for work.",
            ),
            (
                "Wire Cutters / Diagonal Cutters",
                "Specifically designed for cutting copper wires and small fasteners cleanly.",
            ),
        ],
    ),
    (
        "Essentials - Cutting & Measuring",
        &[
            (
                "Utility Knife",
                "A retractable blade knife for safely opening boxes, cutting cardboard, carpet, drywall scoring, etc. Keep spare blades.",
            ),
            (
                "Tape Measure",
                "A 25-foot (~7.5m) retractable, locking tape measure is standard. Ensure it's easy to read.",
            ),
            (
                "Level",
                "A small 'torpedo' level (~9in/23cm) for pictures/shelves. A longer level (2-4ft / 60-120cm) is better for larger projects like installing cabinets.",
            ),
            (
                "Hacksaw",
                "Fine-toothed saw primarily for cutting metal (pipes, bolts, brackets) and plastic conduit.",
            ),
            (
                "Combination Square",
                "Versatile tool for marking 90° and 45° angles, checking squareness, measuring depths, and as a straight edge.",
            ),
        ],
    ),
    (
        "Safety & Utility",
        &[
            (
                "Flashlight / Headlamp",
                "Essential for dark spaces (under sinks, attics). An LED headlamp provides hands-free light.",
            ),
            (
                "Safety Glasses / Goggles",
                "Crucial eye protection when hammering, cutting, drilling, using power tools, or working with chemicals.",
            ),
            (
                "Work Gloves",
                "Protect hands from splinters, cuts, chemicals, and general dirt. Have a few types (general purpose, heavy-duty).",
            ),
            (
                "Dust Masks / Respirator",
                "Important for protecting lungs when sanding, sawing, or working in dusty environments. N95 masks are a common standard.",
            ),
            (
                "Step Stool / Ladder",
                "Safely reach high places for tasks like changing lightbulbs, painting, or accessing storage.",
            ),
        ],
    ),
    (
        "Plumbing & Electrical Basics",
        &[
            (
                "Plunger (Cup & Flange)",
                "Essential household item. Use a flange plunger for toilets and a cup plunger for sinks/drains.",
            ),
            (
                "Pipe Wrench",
                "Heavy-duty wrench specifically designed for gripping round pipes. Useful for plumbing work.",
            ),
            (
                "Caulking Gun",
                "Applies caulk or sealant from a tube to seal gaps around windows, doors, tubs, etc.",
            ),
            (
                "Non-Contact Voltage Tester",
                "Safely checks for live electricity in outlets, switches, cords, and wires without direct contact. Essential electrical safety tool.",
            ),
            (
                "Wire Stripper/Cutter Tool",
                "Combines wire cutting with specific notches for stripping insulation from various wire gauges.",
            ),
        ],
    ),
    (
        "Good Additions (Hand Tools)",
        &[
            (
                "Socket Set (Ratchet & Sockets)",
                "Efficiently tighten/loosen nuts and bolts. Get a set with 1/4\" and 3/8\" drives, including Metric & SAE sockets.",
            ),
            (
                "Combination Wrench Set",
                "Provides better grip than adjustable wrenches. Set should include common Metric & SAE sizes.",
            ),
            (
                "Pry Bar / Crowbar",
                "For leveraging, prying apart boards, heavy-duty scraping, and removing embedded nails.",
            ),
            (
                "Putty Knife (Flexible & Stiff)",
                "Flexible type for applying spackle/wood filler; stiff type for scraping paint or adhesive.",
            ),
            (
                "Sandpaper Assortment",
                "Various grits (e.g., 80, 120, 220) for smoothing wood or preparing surfaces for finishing.",
            ),
            (
                "Chalk Line",
                "For snapping long, straight lines on surfaces, useful for construction, flooring, or painting projects.",
            ),
        ],
    ),
    (
        "Good Additions (Power Tools)",
        &[
            (
                "Cordless Drill/Driver",
                "Arguably the most useful power tool. Drills holes and drives screws. 18V or 20V models offer good power.",
            ),
            (
                "Circular Saw",
                "For making fast, straight cuts in wood (dimensional lumber, plywood). Corded or cordless options available.",
            ),
            (
                "Jigsaw",
                "Excellent for cutting curves, circles, and intricate shapes in wood, plastic, or thin metal.",
            ),
            (
                "Orbital Sander",
                "For smooth finishing of wood surfaces quickly and easily before painting or staining.",
            ),
            (
                "Oscillating Multi-Tool",
                "Extremely versatile for plunge cuts, sanding, scraping, grout removal, etc., especially in tight spots. Blades are interchangeable.",
            ),
            (
                "Shop Vacuum (Wet/Dry Vac)",
                "Powerful vacuum for cleaning up workshop messes, sawdust, water spills, and general heavy-duty cleaning.",
            ),
        ],
    ),
    (
        "Outdoor & Garden Basics",
        &[
            (
                "Shovel (Round or Square Point)",
                "Round point for digging; square point for scooping/moving loose materials like mulch or gravel.",
            ),
            (
                "Garden Rake / Leaf Rake",
                "Metal garden rake for soil/gravel; flexible leaf rake for leaves and light debris.",
            ),
            (
                "Hand Pruners / Shears",
                "For trimming small branches, deadheading flowers, and general garden plant maintenance.",
            ),
            (
                "Garden Hose & Nozzle",
                "Essential for watering plants, cleaning outdoor surfaces, etc.",
            ),
            (
                "Wheelbarrow or Garden Cart",
                "For moving soil, mulch, yard waste, tools, or heavy items around the yard.",
            ),
        ],
    ),
];
