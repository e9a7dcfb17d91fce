//! Built-in country → city reference table.

/// `(city, population, area, description)`
pub type CityRow = (&'static str, &'static str, &'static str, &'static str);

pub const COUNTRIES: &[(&str, &[CityRow])] = &[
    (
        "USA",
        &[
            ("Washington D.C.", "670,000", "177.0 km²", "USA Capital, Federal district, historical landmarks"),
            ("New York", "8.8 million", "783.8 km²", "Largest city in the USA, global financial center"),
            ("Los Angeles", "3.9 million", "1,302 km²", "Entertainment capital, home to Hollywood"),
            ("Chicago", "2.7 million", "606.1 km²", "Known for architecture, blues music"),
            ("Houston", "2.3 million", "1,651 km²", "Space Center, energy industry hub"),
            ("Phoenix", "1.6 million", "1,344 km²", "Desert metropolis with year-round sunshine"),
            ("Philadelphia", "1.6 million", "369.6 km²", "Historic city, home of Liberty Bell"),
        ],
    ),
    (
        "Canada",
        &[
            ("Toronto", "2.9 million", "630.2 km²", "Canada's largest city, CN Tower"),
            ("Montreal", "1.8 million", "431.5 km²", "French-speaking cultural hub"),
            ("Vancouver", "675,000", "115.2 km²", "Surrounded by mountains and water"),
            ("Calgary", "1.3 million", "825.3 km²", "Gateway to the Rocky Mountains"),
            ("Ottawa", "994,000", "2,790 km²", "Canada's capital city"),
            ("Edmonton", "981,000", "684.4 km²", "Festival City, home to West Edmonton Mall"),
        ],
    ),
    (
        "UK",
        &[
            ("London", "9.0 million", "1,572 km²", "Capital city, Westminster, Big Ben"),
            ("Manchester", "547,000", "115.6 km²", "Industrial city, famous for football"),
            ("Birmingham", "1.1 million", "267.8 km²", "UK's second-largest city"),
            ("Glasgow", "633,000", "175.5 km²", "Scotland's largest city"),
            ("Liverpool", "498,000", "111.8 km²", "Birthplace of The Beatles"),
            ("Edinburgh", "524,000", "264 km²", "Scotland's capital, Edinburgh Castle"),
        ],
    ),
    (
        "France",
        &[
            ("Paris", "2.1 million", "105.4 km²", "City of Light, Eiffel Tower"),
            ("Marseille", "870,000", "240.6 km²", "Major Mediterranean port"),
            ("Lyon", "516,000", "47.9 km²", "Culinary capital of France"),
            ("Toulouse", "479,000", "118.3 km²", "Pink City, aerospace center"),
            ("Nice", "342,000", "71.9 km²", "Azure coast, tourism destination"),
            ("Nantes", "309,000", "65.2 km²", "Historic port city on the Loire"),
        ],
    ),
    (
        "Japan",
        &[
            ("Tokyo", "13.9 million", "2,194 km²", "World's largest urban economy"),
            ("Osaka", "2.7 million", "225.2 km²", "Japan's kitchen, vibrant food culture"),
            ("Kyoto", "1.5 million", "827.8 km²", "Historic temples, traditional culture"),
            ("Yokohama", "3.7 million", "437.6 km²", "Major port city"),
            ("Sapporo", "1.9 million", "1,121 km²", "Known for snow festival, beer"),
            ("Nagoya", "2.3 million", "326.4 km²", "Manufacturing hub, automotive industry"),
        ],
    ),
    (
        "Australia",
        &[
            ("Sydney", "5.3 million", "12,368 km²", "Harbor city, Opera House"),
            ("Melbourne", "5.0 million", "9,992 km²", "Cultural capital, sporting events"),
            ("Brisbane", "2.4 million", "15,826 km²", "River city, subtropical climate"),
            ("Perth", "2.1 million", "6,418 km²", "Isolated city, beautiful beaches"),
            ("Adelaide", "1.3 million", "3,258 km²", "City of churches, wine regions"),
            ("Gold Coast", "710,000", "1,334 km²", "Tourism destination, surf beaches"),
        ],
    ),
    (
        "Israel",
        &[
            ("Jerusalem", "936,000", "125.1 km²", "Holy city, religious importance"),
            ("Tel Aviv", "460,000", "52 km²", "Mediterranean coastline, Tourism destination, tech hub"),
            ("Haifa", "285,000", "63.7 km²", "Port city, Mount Carmel"),
            ("Rishon LeZion", "251,000", "58.7 km²", "Fourth-largest city in Israel"),
            ("Petah Tikva", "248,000", "35.9 km²", "Founded in 1878, industrial center"),
            ("Beersheba", "209,000", "117.5 km²", "Capital of the Negev desert"),
            ("Ashdod", "225,000", "47.2 km²", "Major port city, diverse population"),
            ("Ashkelon", "145,000", "47.8 km²", "Coastal city, ancient history"),
            ("Eilat", "55,000", "84.79 km²", "Resort city, Red sea beaches, Israel's southernmost city"),
        ],
    ),
    (
        "Taiwan",
        &[
            ("Taipei", "2.6 million", "271.8 km²", "Capital city, Taipei 101 skyscraper"),
            ("Kaohsiung", "2.7 million", "2,952 km²", "Harbor city, industrial center"),
            ("Taichung", "2.8 million", "2,215 km²", "Cultural city, mild climate"),
            ("Tainan", "1.9 million", "2,192 km²", "Ancient capital, historic sites"),
            ("Hsinchu", "443,000", "104.1 km²", "Silicon Valley of Taiwan"),
            ("Keelung", "371,000", "132.8 km²", "Northern port city"),
        ],
    ),
    (
        "Czech Republic",
        &[
            ("Prague", "1.3 million", "496 km²", "Capital city, historic architecture"),
            ("Brno", "380,000", "230.2 km²", "Second-largest city, university center"),
            ("Ostrava", "290,000", "214.2 km²", "Industrial city, coal mining history"),
            ("Pilsen", "174,000", "137.7 km²", "Birthplace of Pilsner beer"),
            ("Liberec", "104,000", "106.1 km²", "Northern city, winter sports"),
            ("Olomouc", "100,000", "103.4 km²", "Historic university city"),
            ("Karlovy Vary", "48,000", "59.1 km²", "Spa town, famous hot springs"),
        ],
    ),
];
