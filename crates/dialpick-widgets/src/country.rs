//! The country directory: the static, read-only data source the selector
//! filters.
//!
//! Records are supplied once at startup (here: compiled in), never mutated,
//! and small enough that a linear scan per keystroke is fine. The directory
//! is ordered by display name and that order is preserved by filtering.

/// A single country record.
///
/// `iso_code` is the ISO 3166-1 alpha-2 code and acts as the unique key;
/// `dial_code` is the international calling code including the `+` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// Display name.
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 code, uppercase, unique.
    pub iso_code: &'static str,
    /// International calling code, e.g. `+49`.
    pub dial_code: &'static str,
}

impl Country {
    /// The country's flag as an emoji string.
    ///
    /// A flag emoji is the ISO code spelled in regional-indicator symbols
    /// (U+1F1E6..U+1F1FF), so it is derived rather than stored.
    pub fn flag(&self) -> String {
        self.iso_code
            .chars()
            .filter_map(|c| {
                let c = c.to_ascii_uppercase();
                if c.is_ascii_uppercase() {
                    char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32))
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Look up a country in [`ALL`] by ISO code (case-insensitive).
pub fn find(iso_code: &str) -> Option<&'static Country> {
    ALL.iter().find(|c| c.iso_code.eq_ignore_ascii_case(iso_code))
}

/// The full directory, ordered by display name.
pub static ALL: &[Country] = &[
    Country { name: "Afghanistan", iso_code: "AF", dial_code: "+93" },
    Country { name: "Albania", iso_code: "AL", dial_code: "+355" },
    Country { name: "Algeria", iso_code: "DZ", dial_code: "+213" },
    Country { name: "American Samoa", iso_code: "AS", dial_code: "+1684" },
    Country { name: "Andorra", iso_code: "AD", dial_code: "+376" },
    Country { name: "Angola", iso_code: "AO", dial_code: "+244" },
    Country { name: "Anguilla", iso_code: "AI", dial_code: "+1264" },
    Country { name: "Antigua and Barbuda", iso_code: "AG", dial_code: "+1268" },
    Country { name: "Argentina", iso_code: "AR", dial_code: "+54" },
    Country { name: "Armenia", iso_code: "AM", dial_code: "+374" },
    Country { name: "Aruba", iso_code: "AW", dial_code: "+297" },
    Country { name: "Australia", iso_code: "AU", dial_code: "+61" },
    Country { name: "Austria", iso_code: "AT", dial_code: "+43" },
    Country { name: "Azerbaijan", iso_code: "AZ", dial_code: "+994" },
    Country { name: "Bahamas", iso_code: "BS", dial_code: "+1242" },
    Country { name: "Bahrain", iso_code: "BH", dial_code: "+973" },
    Country { name: "Bangladesh", iso_code: "BD", dial_code: "+880" },
    Country { name: "Barbados", iso_code: "BB", dial_code: "+1246" },
    Country { name: "Belarus", iso_code: "BY", dial_code: "+375" },
    Country { name: "Belgium", iso_code: "BE", dial_code: "+32" },
    Country { name: "Belize", iso_code: "BZ", dial_code: "+501" },
    Country { name: "Benin", iso_code: "BJ", dial_code: "+229" },
    Country { name: "Bermuda", iso_code: "BM", dial_code: "+1441" },
    Country { name: "Bhutan", iso_code: "BT", dial_code: "+975" },
    Country { name: "Bolivia", iso_code: "BO", dial_code: "+591" },
    Country { name: "Bosnia and Herzegovina", iso_code: "BA", dial_code: "+387" },
    Country { name: "Botswana", iso_code: "BW", dial_code: "+267" },
    Country { name: "Brazil", iso_code: "BR", dial_code: "+55" },
    Country { name: "British Indian Ocean Territory", iso_code: "IO", dial_code: "+246" },
    Country { name: "British Virgin Islands", iso_code: "VG", dial_code: "+1284" },
    Country { name: "Brunei", iso_code: "BN", dial_code: "+673" },
    Country { name: "Bulgaria", iso_code: "BG", dial_code: "+359" },
    Country { name: "Burkina Faso", iso_code: "BF", dial_code: "+226" },
    Country { name: "Burundi", iso_code: "BI", dial_code: "+257" },
    Country { name: "Cambodia", iso_code: "KH", dial_code: "+855" },
    Country { name: "Cameroon", iso_code: "CM", dial_code: "+237" },
    Country { name: "Canada", iso_code: "CA", dial_code: "+1" },
    Country { name: "Cape Verde", iso_code: "CV", dial_code: "+238" },
    Country { name: "Cayman Islands", iso_code: "KY", dial_code: "+1345" },
    Country { name: "Central African Republic", iso_code: "CF", dial_code: "+236" },
    Country { name: "Chad", iso_code: "TD", dial_code: "+235" },
    Country { name: "Chile", iso_code: "CL", dial_code: "+56" },
    Country { name: "China", iso_code: "CN", dial_code: "+86" },
    Country { name: "Christmas Island", iso_code: "CX", dial_code: "+61" },
    Country { name: "Cocos Islands", iso_code: "CC", dial_code: "+61" },
    Country { name: "Colombia", iso_code: "CO", dial_code: "+57" },
    Country { name: "Comoros", iso_code: "KM", dial_code: "+269" },
    Country { name: "Cook Islands", iso_code: "CK", dial_code: "+682" },
    Country { name: "Costa Rica", iso_code: "CR", dial_code: "+506" },
    Country { name: "Croatia", iso_code: "HR", dial_code: "+385" },
    Country { name: "Cuba", iso_code: "CU", dial_code: "+53" },
    Country { name: "Curacao", iso_code: "CW", dial_code: "+599" },
    Country { name: "Cyprus", iso_code: "CY", dial_code: "+357" },
    Country { name: "Czechia", iso_code: "CZ", dial_code: "+420" },
    Country { name: "Democratic Republic of the Congo", iso_code: "CD", dial_code: "+243" },
    Country { name: "Denmark", iso_code: "DK", dial_code: "+45" },
    Country { name: "Djibouti", iso_code: "DJ", dial_code: "+253" },
    Country { name: "Dominica", iso_code: "DM", dial_code: "+1767" },
    Country { name: "Dominican Republic", iso_code: "DO", dial_code: "+1809" },
    Country { name: "Ecuador", iso_code: "EC", dial_code: "+593" },
    Country { name: "Egypt", iso_code: "EG", dial_code: "+20" },
    Country { name: "El Salvador", iso_code: "SV", dial_code: "+503" },
    Country { name: "Equatorial Guinea", iso_code: "GQ", dial_code: "+240" },
    Country { name: "Eritrea", iso_code: "ER", dial_code: "+291" },
    Country { name: "Estonia", iso_code: "EE", dial_code: "+372" },
    Country { name: "Eswatini", iso_code: "SZ", dial_code: "+268" },
    Country { name: "Ethiopia", iso_code: "ET", dial_code: "+251" },
    Country { name: "Falkland Islands", iso_code: "FK", dial_code: "+500" },
    Country { name: "Faroe Islands", iso_code: "FO", dial_code: "+298" },
    Country { name: "Fiji", iso_code: "FJ", dial_code: "+679" },
    Country { name: "Finland", iso_code: "FI", dial_code: "+358" },
    Country { name: "France", iso_code: "FR", dial_code: "+33" },
    Country { name: "French Guiana", iso_code: "GF", dial_code: "+594" },
    Country { name: "French Polynesia", iso_code: "PF", dial_code: "+689" },
    Country { name: "Gabon", iso_code: "GA", dial_code: "+241" },
    Country { name: "Gambia", iso_code: "GM", dial_code: "+220" },
    Country { name: "Georgia", iso_code: "GE", dial_code: "+995" },
    Country { name: "Germany", iso_code: "DE", dial_code: "+49" },
    Country { name: "Ghana", iso_code: "GH", dial_code: "+233" },
    Country { name: "Gibraltar", iso_code: "GI", dial_code: "+350" },
    Country { name: "Greece", iso_code: "GR", dial_code: "+30" },
    Country { name: "Greenland", iso_code: "GL", dial_code: "+299" },
    Country { name: "Grenada", iso_code: "GD", dial_code: "+1473" },
    Country { name: "Guadeloupe", iso_code: "GP", dial_code: "+590" },
    Country { name: "Guam", iso_code: "GU", dial_code: "+1671" },
    Country { name: "Guatemala", iso_code: "GT", dial_code: "+502" },
    Country { name: "Guernsey", iso_code: "GG", dial_code: "+44" },
    Country { name: "Guinea", iso_code: "GN", dial_code: "+224" },
    Country { name: "Guinea-Bissau", iso_code: "GW", dial_code: "+245" },
    Country { name: "Guyana", iso_code: "GY", dial_code: "+592" },
    Country { name: "Haiti", iso_code: "HT", dial_code: "+509" },
    Country { name: "Honduras", iso_code: "HN", dial_code: "+504" },
    Country { name: "Hong Kong", iso_code: "HK", dial_code: "+852" },
    Country { name: "Hungary", iso_code: "HU", dial_code: "+36" },
    Country { name: "Iceland", iso_code: "IS", dial_code: "+354" },
    Country { name: "India", iso_code: "IN", dial_code: "+91" },
    Country { name: "Indonesia", iso_code: "ID", dial_code: "+62" },
    Country { name: "Iran", iso_code: "IR", dial_code: "+98" },
    Country { name: "Iraq", iso_code: "IQ", dial_code: "+964" },
    Country { name: "Ireland", iso_code: "IE", dial_code: "+353" },
    Country { name: "Isle of Man", iso_code: "IM", dial_code: "+44" },
    Country { name: "Israel", iso_code: "IL", dial_code: "+972" },
    Country { name: "Italy", iso_code: "IT", dial_code: "+39" },
    Country { name: "Ivory Coast", iso_code: "CI", dial_code: "+225" },
    Country { name: "Jamaica", iso_code: "JM", dial_code: "+1876" },
    Country { name: "Japan", iso_code: "JP", dial_code: "+81" },
    Country { name: "Jersey", iso_code: "JE", dial_code: "+44" },
    Country { name: "Jordan", iso_code: "JO", dial_code: "+962" },
    Country { name: "Kazakhstan", iso_code: "KZ", dial_code: "+7" },
    Country { name: "Kenya", iso_code: "KE", dial_code: "+254" },
    Country { name: "Kiribati", iso_code: "KI", dial_code: "+686" },
    Country { name: "Kuwait", iso_code: "KW", dial_code: "+965" },
    Country { name: "Kyrgyzstan", iso_code: "KG", dial_code: "+996" },
    Country { name: "Laos", iso_code: "LA", dial_code: "+856" },
    Country { name: "Latvia", iso_code: "LV", dial_code: "+371" },
    Country { name: "Lebanon", iso_code: "LB", dial_code: "+961" },
    Country { name: "Lesotho", iso_code: "LS", dial_code: "+266" },
    Country { name: "Liberia", iso_code: "LR", dial_code: "+231" },
    Country { name: "Libya", iso_code: "LY", dial_code: "+218" },
    Country { name: "Liechtenstein", iso_code: "LI", dial_code: "+423" },
    Country { name: "Lithuania", iso_code: "LT", dial_code: "+370" },
    Country { name: "Luxembourg", iso_code: "LU", dial_code: "+352" },
    Country { name: "Macau", iso_code: "MO", dial_code: "+853" },
    Country { name: "Madagascar", iso_code: "MG", dial_code: "+261" },
    Country { name: "Malawi", iso_code: "MW", dial_code: "+265" },
    Country { name: "Malaysia", iso_code: "MY", dial_code: "+60" },
    Country { name: "Maldives", iso_code: "MV", dial_code: "+960" },
    Country { name: "Mali", iso_code: "ML", dial_code: "+223" },
    Country { name: "Malta", iso_code: "MT", dial_code: "+356" },
    Country { name: "Marshall Islands", iso_code: "MH", dial_code: "+692" },
    Country { name: "Martinique", iso_code: "MQ", dial_code: "+596" },
    Country { name: "Mauritania", iso_code: "MR", dial_code: "+222" },
    Country { name: "Mauritius", iso_code: "MU", dial_code: "+230" },
    Country { name: "Mayotte", iso_code: "YT", dial_code: "+262" },
    Country { name: "Mexico", iso_code: "MX", dial_code: "+52" },
    Country { name: "Micronesia", iso_code: "FM", dial_code: "+691" },
    Country { name: "Moldova", iso_code: "MD", dial_code: "+373" },
    Country { name: "Monaco", iso_code: "MC", dial_code: "+377" },
    Country { name: "Mongolia", iso_code: "MN", dial_code: "+976" },
    Country { name: "Montenegro", iso_code: "ME", dial_code: "+382" },
    Country { name: "Montserrat", iso_code: "MS", dial_code: "+1664" },
    Country { name: "Morocco", iso_code: "MA", dial_code: "+212" },
    Country { name: "Mozambique", iso_code: "MZ", dial_code: "+258" },
    Country { name: "Myanmar", iso_code: "MM", dial_code: "+95" },
    Country { name: "Namibia", iso_code: "NA", dial_code: "+264" },
    Country { name: "Nauru", iso_code: "NR", dial_code: "+674" },
    Country { name: "Nepal", iso_code: "NP", dial_code: "+977" },
    Country { name: "Netherlands", iso_code: "NL", dial_code: "+31" },
    Country { name: "New Caledonia", iso_code: "NC", dial_code: "+687" },
    Country { name: "New Zealand", iso_code: "NZ", dial_code: "+64" },
    Country { name: "Nicaragua", iso_code: "NI", dial_code: "+505" },
    Country { name: "Niger", iso_code: "NE", dial_code: "+227" },
    Country { name: "Nigeria", iso_code: "NG", dial_code: "+234" },
    Country { name: "Niue", iso_code: "NU", dial_code: "+683" },
    Country { name: "Norfolk Island", iso_code: "NF", dial_code: "+672" },
    Country { name: "North Korea", iso_code: "KP", dial_code: "+850" },
    Country { name: "North Macedonia", iso_code: "MK", dial_code: "+389" },
    Country { name: "Northern Mariana Islands", iso_code: "MP", dial_code: "+1670" },
    Country { name: "Norway", iso_code: "NO", dial_code: "+47" },
    Country { name: "Oman", iso_code: "OM", dial_code: "+968" },
    Country { name: "Pakistan", iso_code: "PK", dial_code: "+92" },
    Country { name: "Palau", iso_code: "PW", dial_code: "+680" },
    Country { name: "Palestine", iso_code: "PS", dial_code: "+970" },
    Country { name: "Panama", iso_code: "PA", dial_code: "+507" },
    Country { name: "Papua New Guinea", iso_code: "PG", dial_code: "+675" },
    Country { name: "Paraguay", iso_code: "PY", dial_code: "+595" },
    Country { name: "Peru", iso_code: "PE", dial_code: "+51" },
    Country { name: "Philippines", iso_code: "PH", dial_code: "+63" },
    Country { name: "Poland", iso_code: "PL", dial_code: "+48" },
    Country { name: "Portugal", iso_code: "PT", dial_code: "+351" },
    Country { name: "Puerto Rico", iso_code: "PR", dial_code: "+1787" },
    Country { name: "Qatar", iso_code: "QA", dial_code: "+974" },
    Country { name: "Republic of the Congo", iso_code: "CG", dial_code: "+242" },
    Country { name: "Reunion", iso_code: "RE", dial_code: "+262" },
    Country { name: "Romania", iso_code: "RO", dial_code: "+40" },
    Country { name: "Russia", iso_code: "RU", dial_code: "+7" },
    Country { name: "Rwanda", iso_code: "RW", dial_code: "+250" },
    Country { name: "Saint Helena", iso_code: "SH", dial_code: "+290" },
    Country { name: "Saint Kitts and Nevis", iso_code: "KN", dial_code: "+1869" },
    Country { name: "Saint Lucia", iso_code: "LC", dial_code: "+1758" },
    Country { name: "Saint Pierre and Miquelon", iso_code: "PM", dial_code: "+508" },
    Country { name: "Saint Vincent and the Grenadines", iso_code: "VC", dial_code: "+1784" },
    Country { name: "Samoa", iso_code: "WS", dial_code: "+685" },
    Country { name: "San Marino", iso_code: "SM", dial_code: "+378" },
    Country { name: "Sao Tome and Principe", iso_code: "ST", dial_code: "+239" },
    Country { name: "Saudi Arabia", iso_code: "SA", dial_code: "+966" },
    Country { name: "Senegal", iso_code: "SN", dial_code: "+221" },
    Country { name: "Serbia", iso_code: "RS", dial_code: "+381" },
    Country { name: "Seychelles", iso_code: "SC", dial_code: "+248" },
    Country { name: "Sierra Leone", iso_code: "SL", dial_code: "+232" },
    Country { name: "Singapore", iso_code: "SG", dial_code: "+65" },
    Country { name: "Sint Maarten", iso_code: "SX", dial_code: "+1721" },
    Country { name: "Slovakia", iso_code: "SK", dial_code: "+421" },
    Country { name: "Slovenia", iso_code: "SI", dial_code: "+386" },
    Country { name: "Solomon Islands", iso_code: "SB", dial_code: "+677" },
    Country { name: "Somalia", iso_code: "SO", dial_code: "+252" },
    Country { name: "South Africa", iso_code: "ZA", dial_code: "+27" },
    Country { name: "South Korea", iso_code: "KR", dial_code: "+82" },
    Country { name: "South Sudan", iso_code: "SS", dial_code: "+211" },
    Country { name: "Spain", iso_code: "ES", dial_code: "+34" },
    Country { name: "Sri Lanka", iso_code: "LK", dial_code: "+94" },
    Country { name: "Sudan", iso_code: "SD", dial_code: "+249" },
    Country { name: "Suriname", iso_code: "SR", dial_code: "+597" },
    Country { name: "Sweden", iso_code: "SE", dial_code: "+46" },
    Country { name: "Switzerland", iso_code: "CH", dial_code: "+41" },
    Country { name: "Syria", iso_code: "SY", dial_code: "+963" },
    Country { name: "Taiwan", iso_code: "TW", dial_code: "+886" },
    Country { name: "Tajikistan", iso_code: "TJ", dial_code: "+992" },
    Country { name: "Tanzania", iso_code: "TZ", dial_code: "+255" },
    Country { name: "Thailand", iso_code: "TH", dial_code: "+66" },
    Country { name: "Timor-Leste", iso_code: "TL", dial_code: "+670" },
    Country { name: "Togo", iso_code: "TG", dial_code: "+228" },
    Country { name: "Tokelau", iso_code: "TK", dial_code: "+690" },
    Country { name: "Tonga", iso_code: "TO", dial_code: "+676" },
    Country { name: "Trinidad and Tobago", iso_code: "TT", dial_code: "+1868" },
    Country { name: "Tunisia", iso_code: "TN", dial_code: "+216" },
    Country { name: "Turkey", iso_code: "TR", dial_code: "+90" },
    Country { name: "Turkmenistan", iso_code: "TM", dial_code: "+993" },
    Country { name: "Turks and Caicos Islands", iso_code: "TC", dial_code: "+1649" },
    Country { name: "Tuvalu", iso_code: "TV", dial_code: "+688" },
    Country { name: "Uganda", iso_code: "UG", dial_code: "+256" },
    Country { name: "Ukraine", iso_code: "UA", dial_code: "+380" },
    Country { name: "United Arab Emirates", iso_code: "AE", dial_code: "+971" },
    Country { name: "United Kingdom", iso_code: "GB", dial_code: "+44" },
    Country { name: "United States", iso_code: "US", dial_code: "+1" },
    Country { name: "Uruguay", iso_code: "UY", dial_code: "+598" },
    Country { name: "US Virgin Islands", iso_code: "VI", dial_code: "+1340" },
    Country { name: "Uzbekistan", iso_code: "UZ", dial_code: "+998" },
    Country { name: "Vanuatu", iso_code: "VU", dial_code: "+678" },
    Country { name: "Vatican City", iso_code: "VA", dial_code: "+379" },
    Country { name: "Venezuela", iso_code: "VE", dial_code: "+58" },
    Country { name: "Vietnam", iso_code: "VN", dial_code: "+84" },
    Country { name: "Wallis and Futuna", iso_code: "WF", dial_code: "+681" },
    Country { name: "Western Sahara", iso_code: "EH", dial_code: "+212" },
    Country { name: "Yemen", iso_code: "YE", dial_code: "+967" },
    Country { name: "Zambia", iso_code: "ZM", dial_code: "+260" },
    Country { name: "Zimbabwe", iso_code: "ZW", dial_code: "+263" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn flag_is_regional_indicator_pair() {
        let fr = find("FR").unwrap();
        assert_eq!(fr.flag(), "\u{1F1EB}\u{1F1F7}"); // 🇫🇷
        let jp = find("JP").unwrap();
        assert_eq!(jp.flag(), "\u{1F1EF}\u{1F1F5}"); // 🇯🇵
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("de").map(|c| c.name), Some("Germany"));
        assert_eq!(find("De").map(|c| c.name), Some("Germany"));
        assert_eq!(find("DE").map(|c| c.name), Some("Germany"));
    }

    #[test]
    fn find_unknown_returns_none() {
        assert!(find("ZZ").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn codes_are_unique_two_letter_uppercase() {
        let mut seen = HashSet::new();
        for country in ALL {
            assert_eq!(country.iso_code.len(), 2, "{}", country.name);
            assert!(
                country.iso_code.chars().all(|c| c.is_ascii_uppercase()),
                "{}",
                country.name
            );
            assert!(seen.insert(country.iso_code), "duplicate {}", country.iso_code);
        }
    }

    #[test]
    fn dial_codes_are_plus_digits() {
        for country in ALL {
            let mut chars = country.dial_code.chars();
            assert_eq!(chars.next(), Some('+'), "{}", country.name);
            assert!(
                chars.as_str().chars().all(|c| c.is_ascii_digit()),
                "{}",
                country.name
            );
        }
    }

    #[test]
    fn directory_is_ordered_by_name() {
        for pair in ALL.windows(2) {
            assert!(
                pair[0].name.to_ascii_lowercase() < pair[1].name.to_ascii_lowercase(),
                "{} vs {}",
                pair[0].name,
                pair[1].name
            );
        }
    }
}
