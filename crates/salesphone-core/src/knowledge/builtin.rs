use super::KnowledgeBase;
use crate::domain::{CountryInfo, TrunkRule};

type CountryRow = (
    &'static str,
    &'static str,
    TrunkRule,
    &'static [(&'static str, &'static str)],
);

// Country names and city spellings match the sales dataset verbatim,
// including its typos ("Glen Waverly", "Gensve", "Aaarhus", "Tsawassen").
const COUNTRIES: &[CountryRow] = &[
    (
        "Australia",
        "61",
        TrunkRule::DropZero,
        &[
            ("Chatswood", "2"),
            ("Glen Waverly", "3"),
            ("Melbourne", "3"),
            ("North Sydney", "2"),
            ("South Brisbane", "7"),
        ],
    ),
    (
        "Austria",
        "43",
        TrunkRule::DropZero,
        &[("Graz", "316"), ("Salzburg", "662")],
    ),
    (
        "Belgium",
        "32",
        TrunkRule::DropZero,
        &[("Bruxelles", "2"), ("Charleroi", "71")],
    ),
    (
        "Canada",
        "1",
        TrunkRule::None,
        &[("Montreal", "514"), ("Tsawassen", "604"), ("Vancouver", "604")],
    ),
    (
        "Denmark",
        "45",
        TrunkRule::DropZero,
        &[("Aaarhus", "86"), ("Kobenhavn", "35")],
    ),
    (
        "Finland",
        "358",
        TrunkRule::DropZero,
        &[("Espoo", "9"), ("Helsinki", "9"), ("Oulu", "8")],
    ),
    (
        "France",
        "33",
        TrunkRule::France10Digit,
        &[
            ("Lille", "3"),
            ("Lyon", "4"),
            ("Marseille", "4"),
            ("Nantes", "2"),
            ("Paris", "1"),
            ("Reims", "3"),
            ("Strasbourg", "3"),
            ("Toulouse", "5"),
            ("Versailles", "1"),
        ],
    ),
    (
        "Germany",
        "49",
        TrunkRule::DropZero,
        &[("Frankfurt", "69"), ("Koln", "221"), ("Munich", "89")],
    ),
    ("Ireland", "353", TrunkRule::DropZero, &[("Dublin", "1")]),
    (
        "Italy",
        "39",
        TrunkRule::DropZero,
        &[("Bergamo", "035"), ("Reggio Emilia", "0522"), ("Torino", "011")],
    ),
    (
        "Japan",
        "81",
        TrunkRule::DropZero,
        &[("Minato-ku", "3"), ("Osaka", "6")],
    ),
    (
        "Norway",
        "47",
        TrunkRule::KeepZero,
        &[("Bergen", "55"), ("Oslo", "22"), ("Stavern", "33")],
    ),
    ("Philippines", "63", TrunkRule::DropZero, &[("Makati City", "2")]),
    ("Singapore", "65", TrunkRule::KeepZero, &[("Singapore", "")]),
    (
        "Spain",
        "34",
        TrunkRule::DropZero,
        &[("Barcelona", "93"), ("Madrid", "91"), ("Sevilla", "95")],
    ),
    (
        "Sweden",
        "46",
        TrunkRule::DropZero,
        &[("Boras", "33"), ("Lule", "920")],
    ),
    ("Switzerland", "41", TrunkRule::DropZero, &[("Gensve", "22")]),
    (
        "UK",
        "44",
        TrunkRule::DropZero,
        &[
            ("Cowes", "1983"),
            ("Liverpool", "151"),
            ("London", "20"),
            ("Manchester", "161"),
        ],
    ),
    (
        "USA",
        "1",
        TrunkRule::None,
        &[
            ("Allentown", "610"),
            ("Boston", "617"),
            ("Brickhaven", "203"),
            ("Bridgewater", "508"),
            ("Brisbane", "415"),
            ("Burbank", "818"),
            ("Burlingame", "650"),
            ("Cambridge", "617"),
            ("Glendale", "818"),
            ("Las Vegas", "702"),
            ("Los Angeles", "213"),
            ("NYC", "212"),
            ("Nashua", "603"),
            ("New Bedford", "508"),
            ("New Haven", "203"),
            ("Newark", "973"),
            ("Pasadena", "626"),
            ("Philadelphia", "215"),
            ("San Diego", "619"),
            ("San Francisco", "415"),
            ("San Jose", "408"),
            ("San Rafael", "415"),
            ("White Plains", "914"),
        ],
    ),
];

pub(super) fn knowledge_base() -> KnowledgeBase {
    let countries = COUNTRIES
        .iter()
        .map(|&(name, code, rule, cities)| {
            (name.to_string(), CountryInfo::from_static(code, rule, cities))
        })
        .collect();
    KnowledgeBase::from_countries(countries)
}
