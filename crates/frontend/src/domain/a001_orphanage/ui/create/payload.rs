/// Value of one multipart part
#[derive(Debug, PartialEq)]
pub enum PartValue<'a, F> {
    Text(String),
    File(&'a F),
}

/// Named multipart part
#[derive(Debug, PartialEq)]
pub struct Part<'a, F> {
    pub name: &'static str,
    pub value: PartValue<'a, F>,
}

/// Ordered list of parts, turned into a `FormData` body right before sending
#[derive(Debug, PartialEq)]
pub struct MultipartPayload<'a, F> {
    parts: Vec<Part<'a, F>>,
}

impl<'a, F> MultipartPayload<'a, F> {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    pub fn push_text(&mut self, name: &'static str, value: impl Into<String>) {
        self.parts.push(Part {
            name,
            value: PartValue::Text(value.into()),
        });
    }

    pub fn push_file(&mut self, name: &'static str, file: &'a F) {
        self.parts.push(Part {
            name,
            value: PartValue::File(file),
        });
    }

    pub fn parts(&self) -> &[Part<'a, F>] {
        &self.parts
    }

    /// First text value appended under `name`
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match &p.value {
            PartValue::Text(v) if p.name == name => Some(v.as_str()),
            _ => None,
        })
    }

    /// All files appended under `name`, in order
    pub fn files(&self, name: &str) -> Vec<&'a F> {
        self.parts
            .iter()
            .filter(|p| p.name == name)
            .filter_map(|p| match p.value {
                PartValue::File(f) => Some(f),
                PartValue::Text(_) => None,
            })
            .collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.parts.iter().map(|p| p.name).collect()
    }
}

impl<F> Default for MultipartPayload<'_, F> {
    fn default() -> Self {
        Self::new()
    }
}
