//! Identifier naming for generated units.
//!
//! Unit names are derived from resource-type names through a "private"
//! (lowerCamel) form: the leading word of the CamelCase name is lowercased,
//! with acronym awareness so `HTTPRoute` becomes `httpRoute` rather than
//! `hTTPRoute`. File-style unit names then lowercase the whole identifier.

/// Returns the private (lowerCamel) form of a CamelCase type name.
///
/// The leading word is lowercased; an all-caps leading acronym is lowercased
/// up to, but not including, the uppercase letter that starts the next word.
///
/// ## Examples
///
/// ```
/// use fakegen::naming::private_name;
///
/// assert_eq!(private_name("Deployment"), "deployment");
/// assert_eq!(private_name("StatefulSet"), "statefulSet");
/// assert_eq!(private_name("HTTPRoute"), "httpRoute");
/// assert_eq!(private_name("API"), "api");
/// ```
pub fn private_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    // Length of the leading uppercase run.
    let upper_run = chars.iter().take_while(|c| c.is_uppercase()).count();

    // Lowercase the leading word: the whole run when the name is a single
    // acronym, otherwise all but the run's last letter (which starts the
    // next word, e.g. the 'R' in "HTTPRoute").
    let lower_len = match upper_run {
        0 => 0,
        n if n == chars.len() => n,
        1 => 1,
        n => n - 1,
    };

    let mut out = String::with_capacity(name.len());
    for (i, c) in chars.iter().enumerate() {
        if i < lower_len {
            out.extend(c.to_lowercase());
        } else {
            out.push(*c);
        }
    }
    out
}

/// Returns the unit name for a fake per-type client file:
/// `fake_` plus the fully lowercased private name.
///
/// ## Examples
///
/// ```
/// use fakegen::naming::fake_type_unit_name;
///
/// assert_eq!(fake_type_unit_name("Deployment"), "fake_deployment");
/// assert_eq!(fake_type_unit_name("StatefulSet"), "fake_statefulset");
/// ```
pub fn fake_type_unit_name(type_name: &str) -> String {
    format!("fake_{}", private_name(type_name).to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_is_lowercased() {
        assert_eq!(private_name("Deployment"), "deployment");
        assert_eq!(private_name("Pod"), "pod");
    }

    #[test]
    fn later_words_keep_their_case() {
        assert_eq!(private_name("StatefulSet"), "statefulSet");
        assert_eq!(private_name("ReplicaSet"), "replicaSet");
    }

    #[test]
    fn leading_acronym_is_lowercased_up_to_next_word() {
        assert_eq!(private_name("HTTPRoute"), "httpRoute");
        assert_eq!(private_name("DNSRecord"), "dnsRecord");
    }

    #[test]
    fn all_caps_name_is_fully_lowercased() {
        assert_eq!(private_name("API"), "api");
    }

    #[test]
    fn already_private_name_is_unchanged() {
        assert_eq!(private_name("deployment"), "deployment");
    }

    #[test]
    fn empty_name_stays_empty() {
        assert_eq!(private_name(""), "");
    }

    #[test]
    fn fake_unit_names_are_fully_lowercase() {
        assert_eq!(fake_type_unit_name("HTTPRoute"), "fake_httproute");
        assert_eq!(fake_type_unit_name("CronJob"), "fake_cronjob");
    }
}
