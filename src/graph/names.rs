//! Conversion of descendant arguments into name lists.
//!
//! Insertions accept either a single name or any list of names, so both
//! `graph.add("app", "core")` and `graph.add("app", ["core", "log"])` work.

/// Types that can be passed as the descendant list of an insertion.
///
/// Implemented for single names (`&str`, `String`, `&String`) and for arrays,
/// slices and vectors of anything string-like. Order and duplicates are kept.
pub trait IntoNames {
    /// Converts `self` into an ordered list of names.
    fn into_names(self) -> Vec<String>;
}

impl IntoNames for &str {
    fn into_names(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoNames for String {
    fn into_names(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoNames for &String {
    fn into_names(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<T: AsRef<str>> IntoNames for Vec<T> {
    fn into_names(self) -> Vec<String> {
        self.iter().map(|name| name.as_ref().to_string()).collect()
    }
}

impl<T: AsRef<str>> IntoNames for &Vec<T> {
    fn into_names(self) -> Vec<String> {
        self.as_slice().into_names()
    }
}

impl<T: AsRef<str>> IntoNames for &[T] {
    fn into_names(self) -> Vec<String> {
        self.iter().map(|name| name.as_ref().to_string()).collect()
    }
}

impl<T: AsRef<str>, const N: usize> IntoNames for [T; N] {
    fn into_names(self) -> Vec<String> {
        self.iter().map(|name| name.as_ref().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_names() {
        assert_eq!("a".into_names(), vec!["a"]);
        assert_eq!(String::from("b").into_names(), vec!["b"]);
        assert_eq!((&String::from("c")).into_names(), vec!["c"]);
    }

    #[test]
    fn test_lists_keep_order_and_duplicates() {
        assert_eq!(["b", "a", "b"].into_names(), vec!["b", "a", "b"]);
        assert_eq!(vec!["x".to_string(), "y".to_string()].into_names(), vec!["x", "y"]);

        let owned = vec!["p", "q"];
        assert_eq!((&owned).into_names(), vec!["p", "q"]);
        assert_eq!(owned[..1].into_names(), vec!["p"]);
    }

    #[test]
    fn test_empty_list() {
        let empty: [&str; 0] = [];
        assert!(empty.into_names().is_empty());
        assert!(Vec::<String>::new().into_names().is_empty());
    }
}
