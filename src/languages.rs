// File: src/languages.rs
//! Language code tables: the curated default allow-list and English names.

/// Widely used languages. Restricting detection to this list gives better
/// accuracy on short inputs (under ~100 characters).
pub const DEFAULT_ALLOWLIST: &[&str] = &[
    "eng", "fra", "deu", "ita", "spa", "por", "nld", "pol", "rus", "ukr", "ces", "hun",
    "ron", "hrv", "srp", "bos", "slv", "slk", "bul", "lit", "lvs", "ekk", "fin", "swe",
    "nob", "nno", "dan", "isl", "fao", "eus", "cat", "glg", "ast", "cos", "vec", "lij",
    "fry", "ltz", "gle", "gla", "cym", "mlt", "bel", "hsb", "lad", "arb", "heb", "tur",
    "azb", "azj", "kaz", "kir", "tuk", "tgk", "prs", "pes", "urd", "hin", "mar", "bod",
    "uig", "ind", "jav", "sun", "mad", "min", "bug", "ban", "ace", "vie", "tgl", "ceb",
    "hil", "war", "pam", "ilo", "mya", "amh", "tir", "cmn", "jpn", "kor", "som", "hau",
    "fuv", "yor", "ibo", "swh", "zul", "xho", "afr", "nso", "tsn", "ven", "ssw", "nbl",
    "run", "kin", "lug", "lin", "wol", "men", "tem", "kri", "pcm", "twi", "ewe", "gaa",
    "mos", "sna", "nya", "bem", "loz", "kmb", "umb", "ndo", "sag", "suk", "tiv", "srr",
    "dyu", "bam", "fon", "fat", "dag", "que", "quc", "qug", "quy", "quz", "hat", "nav",
    "cak", "mam", "kek", "tzm", "arn", "auc", "cab", "cof", "maz", "pap", "guc", "haw",
    "smo", "fij", "ton", "rar", "pau", "pon", "yap", "bis", "niu", "tah", "mri", "lat",
    "san", "ido", "aar", "khk", "sah", "evn", "chv", "koi", "krl", "crh", "gag", "kaa",
    "tyv", "alt", "niv", "oss", "kbd", "ady", "abk", "fur", "gsw", "wln", "rup", "ell",
    "kat", "hye", "tha", "lao", "khm", "ben", "guj", "pan", "kan", "mal", "ory", "sin",
    "tam", "tel", "div",
];

const NAMES: &[(&str, &str)] = &[
    ("aar", "Afar"),
    ("abk", "Abkhaz"),
    ("ace", "Acehnese"),
    ("ady", "Adyghe"),
    ("afr", "Afrikaans"),
    ("alt", "Altai"),
    ("amh", "Amharic"),
    ("arb", "Standard Arabic"),
    ("arn", "Mapudungun"),
    ("ast", "Asturian"),
    ("auc", "Waorani"),
    ("azb", "South Azerbaijani"),
    ("azj", "North Azerbaijani"),
    ("bam", "Bambara"),
    ("ban", "Balinese"),
    ("bel", "Belarusian"),
    ("bem", "Bemba"),
    ("ben", "Bengali"),
    ("bis", "Bislama"),
    ("bod", "Tibetan"),
    ("bos", "Bosnian"),
    ("bug", "Buginese"),
    ("bul", "Bulgarian"),
    ("cab", "Cabecar"),
    ("cak", "Kaqchikel"),
    ("cat", "Catalan"),
    ("ceb", "Cebuano"),
    ("ces", "Czech"),
    ("chv", "Chuvash"),
    ("cmn", "Mandarin Chinese"),
    ("cof", "Cofan"),
    ("cos", "Corsican"),
    ("crh", "Crimean Tatar"),
    ("cym", "Welsh"),
    ("dag", "Dagbani"),
    ("dan", "Danish"),
    ("deu", "German"),
    ("div", "Dhivehi"),
    ("dyu", "Dyula"),
    ("ekk", "Estonian"),
    ("ell", "Greek"),
    ("eng", "English"),
    ("eus", "Basque"),
    ("evn", "Even"),
    ("ewe", "Ewe"),
    ("fao", "Faroese"),
    ("fat", "Fante"),
    ("fij", "Fijian"),
    ("fin", "Finnish"),
    ("fon", "Fon"),
    ("fra", "French"),
    ("fry", "Frisian"),
    ("fur", "Friulian"),
    ("fuv", "Nigerian Fulfulde"),
    ("gaa", "Ga"),
    ("gag", "Gagauz"),
    ("gla", "Scottish Gaelic"),
    ("gle", "Irish"),
    ("glg", "Galician"),
    ("gsw", "Swiss German"),
    ("guc", "Wayuu"),
    ("guj", "Gujarati"),
    ("hat", "Haitian Creole"),
    ("hau", "Hausa"),
    ("haw", "Hawaiian"),
    ("heb", "Hebrew"),
    ("hil", "Hiligaynon"),
    ("hin", "Hindi"),
    ("hrv", "Croatian"),
    ("hsb", "Upper Sorbian"),
    ("hun", "Hungarian"),
    ("hye", "Armenian"),
    ("ibo", "Igbo"),
    ("ido", "Ido"),
    ("ilo", "Ilocano"),
    ("ind", "Indonesian"),
    ("isl", "Icelandic"),
    ("ita", "Italian"),
    ("jav", "Javanese"),
    ("jpn", "Japanese"),
    ("kaa", "Karakalpak"),
    ("kan", "Kannada"),
    ("kat", "Georgian"),
    ("kaz", "Kazakh"),
    ("kbd", "Kabardian"),
    ("kek", "Q'eqchi'"),
    ("khk", "Halh Mongolian"),
    ("khm", "Khmer"),
    ("kin", "Kinyarwanda"),
    ("kir", "Kyrgyz"),
    ("kmb", "Kimbundu"),
    ("koi", "Komi-Permyak"),
    ("kor", "Korean"),
    ("kri", "Krio"),
    ("krl", "Karelian"),
    ("lad", "Ladino"),
    ("lao", "Lao"),
    ("lat", "Latin"),
    ("lij", "Ligurian"),
    ("lin", "Lingala"),
    ("lit", "Lithuanian"),
    ("loz", "Lozi"),
    ("ltz", "Luxembourgish"),
    ("lug", "Luganda"),
    ("lvs", "Latvian"),
    ("mad", "Madurese"),
    ("mal", "Malayalam"),
    ("mam", "Mam"),
    ("mar", "Marathi"),
    ("maz", "Mazatec"),
    ("men", "Mende"),
    ("min", "Minangkabau"),
    ("mlt", "Maltese"),
    ("mos", "Mossi"),
    ("mri", "Maori"),
    ("mya", "Burmese"),
    ("nav", "Navajo"),
    ("nbl", "South Ndebele"),
    ("ndo", "Ndonga"),
    ("niu", "Niuean"),
    ("niv", "Nivkh"),
    ("nld", "Dutch"),
    ("nno", "Norwegian Nynorsk"),
    ("nob", "Norwegian Bokmal"),
    ("npi", "Nepali"),
    ("nso", "Northern Sotho"),
    ("nya", "Nyanja"),
    ("ory", "Odia"),
    ("oss", "Ossetian"),
    ("pam", "Pampanga"),
    ("pan", "Punjabi"),
    ("pap", "Papiamento"),
    ("pau", "Palauan"),
    ("pcm", "Nigerian Pidgin"),
    ("pes", "Persian"),
    ("pol", "Polish"),
    ("pon", "Pohnpeian"),
    ("por", "Portuguese"),
    ("prs", "Dari"),
    ("quc", "K'iche'"),
    ("que", "Quechua"),
    ("qug", "Chimborazo Highland Quichua"),
    ("quy", "Ayacucho Quechua"),
    ("quz", "Cusco Quechua"),
    ("rar", "Rarotongan"),
    ("ron", "Romanian"),
    ("run", "Rundi"),
    ("rup", "Aromanian"),
    ("rus", "Russian"),
    ("sag", "Sango"),
    ("sah", "Yakut"),
    ("san", "Sanskrit"),
    ("sin", "Sinhala"),
    ("slk", "Slovak"),
    ("slv", "Slovenian"),
    ("smo", "Samoan"),
    ("sna", "Shona"),
    ("som", "Somali"),
    ("spa", "Spanish"),
    ("srp", "Serbian"),
    ("srr", "Serer"),
    ("ssw", "Swati"),
    ("suk", "Sukuma"),
    ("sun", "Sundanese"),
    ("swe", "Swedish"),
    ("swh", "Swahili"),
    ("tah", "Tahitian"),
    ("tam", "Tamil"),
    ("tel", "Telugu"),
    ("tem", "Temne"),
    ("tgk", "Tajik"),
    ("tgl", "Tagalog"),
    ("tha", "Thai"),
    ("tir", "Tigrinya"),
    ("tiv", "Tiv"),
    ("ton", "Tongan"),
    ("tsn", "Tswana"),
    ("tuk", "Turkmen"),
    ("tur", "Turkish"),
    ("twi", "Twi"),
    ("tyv", "Tuvinian"),
    ("tzm", "Central Atlas Tamazight"),
    ("uig", "Uyghur"),
    ("ukr", "Ukrainian"),
    ("umb", "Umbundu"),
    ("urd", "Urdu"),
    ("vec", "Venetian"),
    ("ven", "Venda"),
    ("vie", "Vietnamese"),
    ("war", "Waray"),
    ("wln", "Walloon"),
    ("wol", "Wolof"),
    ("xho", "Xhosa"),
    ("yap", "Yapese"),
    ("yor", "Yoruba"),
    ("zul", "Zulu"),
];

/// English name for an ISO 639-3 code, `"Undetermined"` for `"und"`.
pub fn language_name(code: &str) -> Option<&'static str> {
    if code == crate::core::types::UNDETERMINED {
        return Some("Undetermined");
    }
    NAMES
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|index| NAMES[index].1)
}
