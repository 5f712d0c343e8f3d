use vellum_buffer::Buffer;
use vellum_error::VellumResult;

use crate::validity::Validity;
use crate::{Data, Vector};

/// A vector of owned UTF-8 strings.
#[derive(Clone, Debug)]
pub struct Utf8Vector {
    data: Data<String>,
}

impl Utf8Vector {
    pub fn try_new(buffer: impl Into<Buffer<String>>, validity: Validity) -> VellumResult<Self> {
        Data::try_new(buffer.into(), validity).map(Self::from)
    }

    /// Null rows hold the empty string.
    pub fn from_option_iter<S, I>(iter: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Option<S>>,
    {
        Self::from(Data::from_option_iter(
            iter.into_iter().map(|value| value.map(Into::into)),
        ))
    }

    pub fn data(&self) -> &Data<String> {
        &self.data
    }

    pub fn validity(&self) -> &Validity {
        self.data.validity()
    }

    /// Apply `f` to the string at `index`. The string is copied out first, so `f` may write to
    /// this vector or to any handle sharing its storage.
    pub fn with_str<R, F: FnOnce(&str) -> R>(&self, index: usize, f: F) -> R {
        f(self.get(index).as_str())
    }
}

impl From<Data<String>> for Utf8Vector {
    fn from(data: Data<String>) -> Self {
        Self { data }
    }
}

impl<S: Into<String>> FromIterator<S> for Utf8Vector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from(Data::non_nullable(iter.into_iter().map(Into::into).collect()))
    }
}

impl Vector for Utf8Vector {
    type Value = String;
    type Data = Data<String>;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn is_valid(&self, index: usize) -> bool {
        self.data.is_valid(index)
    }

    fn get(&self, index: usize) -> String {
        self.data.buffer().value(index)
    }

    fn try_get(&self, index: usize) -> VellumResult<String> {
        self.data.buffer().try_value(index)
    }

    fn set(&self, index: usize, value: String) {
        self.data.buffer().set(index, value)
    }

    fn index_of(&self, value: &String) -> Option<usize> {
        self.data.buffer().position(|v| v == value)
    }

    fn clone_with(&self, data: Data<String>) -> Self {
        Self::from(data)
    }

    fn null_count(&self) -> usize {
        self.data.validity().null_count(self.len())
    }
}

#[cfg(test)]
mod test {
    use crate::Vector;
    use crate::vectors::Utf8Vector;

    #[test]
    fn strings() {
        let colors = Utf8Vector::from_iter(["red", "green", "blue", "green"]);
        assert_eq!(colors.get(2), "blue");
        assert_eq!(colors.index_of(&"green".to_string()), Some(1));
        assert_eq!(colors.index_of(&"purple".to_string()), None);
        assert_eq!(colors.with_str(0, str::len), 3);

        colors.set(1, "teal".to_string());
        assert_eq!(colors.index_of(&"green".to_string()), Some(3));
    }

    #[test]
    fn with_str_may_write_back() {
        let names = Utf8Vector::from_iter(["ada", "grace"]);
        let alias = names.clone();
        names.with_str(0, |s| alias.set(1, s.to_uppercase()));
        assert_eq!(names.to_vec(), vec!["ada", "ADA"]);
        names.with_str(1, |s| names.set(1, format!("{s}!")));
        assert_eq!(names.get(1), "ADA!");
    }

    #[test]
    fn nullable_strings() {
        let names = Utf8Vector::from_option_iter([Some("a"), None, Some("c")]);
        assert_eq!(names.null_count(), 1);
        assert_eq!(names.get(1), "");
        assert_eq!(names.to_vec(), vec!["a", "", "c"]);
    }
}
