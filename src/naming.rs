/// Derive the default dotfile name from a fully-qualified type name.
///
/// Generic arguments are dropped, the path is lower-cased, each run of `::`
/// separators (leading and trailing ones included) becomes a single `_`, and
/// the result is wrapped as `.<name>.ini`: `My::App::Server` becomes
/// `.my_app_server.ini`.
pub fn derive_file_name(type_name: &str) -> String {
    let mut rest = type_name.split('<').next().unwrap_or(type_name);
    let mut stem = String::with_capacity(rest.len());
    let mut in_separator = false;
    while let Some(ch) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("::") {
            if !in_separator {
                stem.push('_');
                in_separator = true;
            }
            rest = after;
        } else {
            stem.extend(ch.to_lowercase());
            in_separator = false;
            rest = &rest[ch.len_utf8()..];
        }
    }
    format!(".{stem}.ini")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_segments() {
        assert_eq!(derive_file_name("My::Class"), ".my_class.ini");
    }

    #[test]
    fn three_segments() {
        assert_eq!(derive_file_name("My::App::Server"), ".my_app_server.ini");
    }

    #[test]
    fn single_segment() {
        assert_eq!(derive_file_name("Widget"), ".widget.ini");
    }

    #[test]
    fn separator_runs_collapse() {
        assert_eq!(derive_file_name("My::::Class"), ".my_class.ini");
        assert_eq!(derive_file_name("My::::::App::Server"), ".my_app_server.ini");
    }

    #[test]
    fn leading_and_trailing_separators_become_underscores() {
        assert_eq!(derive_file_name("::My::Class"), "._my_class.ini");
        assert_eq!(derive_file_name("My::Class::"), ".my_class_.ini");
    }

    #[test]
    fn lone_colons_are_kept() {
        assert_eq!(derive_file_name("My:Class"), ".my:class.ini");
    }

    #[test]
    fn generic_arguments_dropped() {
        assert_eq!(
            derive_file_name("my_app::Wrapper<my_app::Inner>"),
            ".my_app_wrapper.ini"
        );
    }

    #[test]
    fn rust_type_name() {
        struct Server;
        let derived = derive_file_name(std::any::type_name::<Server>());
        assert!(derived.starts_with(".homeconfig_naming_"));
        assert!(derived.ends_with("_server.ini"));
    }

    #[test]
    fn derivation_is_stable() {
        assert_eq!(
            derive_file_name("My::Class"),
            derive_file_name("My::Class")
        );
    }
}
