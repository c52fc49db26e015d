//! Longest common prefix of a set of strings

/// Return the longest string that every item starts with.
///
/// Comparison is by `char`, so the result never ends inside a multi-byte
/// UTF-8 sequence. An empty slice yields `""`.
pub fn longest_common_prefix<S: AsRef<str>>(items: &[S]) -> String {
    let Some((first, rest)) = items.split_first() else {
        return String::new();
    };
    let first = first.as_ref();
    let mut end = first.len();

    for item in rest {
        let shared: usize = first
            .char_indices()
            .zip(item.as_ref().chars())
            .take_while(|((_, a), b)| a == b)
            .map(|((_, a), _)| a.len_utf8())
            .sum();
        end = end.min(shared);
        if end == 0 {
            break;
        }
    }

    first[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let items: [&str; 0] = [];
        assert_eq!(longest_common_prefix(&items), "");
    }

    #[test]
    fn single_item_is_its_own_prefix() {
        assert_eq!(longest_common_prefix(&["alpha"]), "alpha");
    }

    #[test]
    fn shared_prefix() {
        assert_eq!(
            longest_common_prefix(&["interview", "internet", "interval"]),
            "inter"
        );
    }

    #[test]
    fn nothing_shared() {
        assert_eq!(longest_common_prefix(&["abc", "xyz"]), "");
    }

    #[test]
    fn one_item_is_prefix_of_another() {
        assert_eq!(longest_common_prefix(&["home", "homeric"]), "home");
    }

    #[test]
    fn stops_on_char_boundary() {
        // 'é' and 'è' share their first UTF-8 byte
        assert_eq!(longest_common_prefix(&["caé", "caè"]), "ca");
    }
}
