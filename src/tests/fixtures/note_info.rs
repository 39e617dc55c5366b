// Shared test fixture for NoteInfo payloads.

use crate::modules::notes::core::note::NoteInfo;

pub struct NoteInfoBuilder {
    inner: NoteInfo,
}

impl Default for NoteInfoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NoteInfoBuilder {
    pub fn new() -> Self {
        Self {
            inner: NoteInfo {
                title: "Stout".to_string(),
                context: "10.0.0.1".to_string(),
                author: "Ada".to_string(),
                is_public: true,
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn context(mut self, v: impl Into<String>) -> Self {
        self.inner.context = v.into();
        self
    }

    pub fn author(mut self, v: impl Into<String>) -> Self {
        self.inner.author = v.into();
        self
    }

    pub fn is_public(mut self, v: bool) -> Self {
        self.inner.is_public = v;
        self
    }

    pub fn build(self) -> NoteInfo {
        self.inner
    }
}

#[cfg(test)]
mod note_info_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = NoteInfoBuilder::default().build();
        assert_eq!(built.title, "Stout");
        assert_eq!(built.context, "10.0.0.1");
        assert_eq!(built.author, "Ada");
        assert!(built.is_public);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = NoteInfoBuilder::new()
            .title("t")
            .context("c")
            .author("a")
            .is_public(false)
            .build();

        assert_eq!(
            custom,
            NoteInfo {
                title: "t".into(),
                context: "c".into(),
                author: "a".into(),
                is_public: false,
            }
        );
    }
}
