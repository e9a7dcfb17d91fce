//! Built-in airline reference table.

/// `(code, name, rating, hub, website, fleet)`
pub type AirlineRow = (&'static str, &'static str, f64, &'static str, &'static str, u32);

pub const AIRLINES: &[AirlineRow] = &[
    ("AA", "American Airlines", 4.0, "Dallas/Fort Worth", "aa.com", 900),
    ("DL", "Delta Air Lines", 4.2, "Atlanta", "delta.com", 800),
    ("UA", "United Airlines", 3.8, "Chicago", "united.com", 850),
    ("SW", "Southwest Airlines", 4.5, "Dallas Love Field", "southwest.com", 750),
    ("BR", "EVA Air", 4.3, "Taipei", "evaair.com", 80),
    ("LH", "Lufthansa", 4.1, "Frankfurt", "lufthansa.com", 280),
    ("LY", "EL AL", 3.9, "Tel Aviv", "elal.com", 45),
    ("KL", "KLM", 4.0, "Amsterdam", "klm.com", 120),
    ("CX", "Cathay Pacific", 4.4, "Hong Kong", "cathaypacific.com", 180),
    ("EK", "Emirates", 4.6, "Dubai", "emirates.com", 260),
    ("QR", "Qatar Airways", 4.7, "Doha", "qatarairways.com", 200),
    ("SQ", "Singapore Airlines", 4.8, "Singapore", "singaporeair.com", 140),
];
