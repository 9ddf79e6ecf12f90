use std::collections::HashMap;
use std::sync::OnceLock;

/// How one DSL component is rendered: its markup tag and an optional
/// attribute string copied verbatim into the opening tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpec {
    pub tag: String,
    pub attributes: Option<String>,
}

impl ComponentSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: None,
        }
    }

    pub fn with_attributes(mut self, attributes: impl Into<String>) -> Self {
        self.attributes = Some(attributes.into());
        self
    }

    /// Contents of the opening tag, e.g. `div className='flex'`.
    pub fn open_tag(&self) -> String {
        match &self.attributes {
            Some(attrs) => format!("{} {}", self.tag, attrs),
            None => self.tag.clone(),
        }
    }
}

/// Component name -> rendering. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRegistry {
    entries: HashMap<String, ComponentSpec>,
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::empty()
            .with(
                "HStack",
                ComponentSpec::new("div").with_attributes("className='flex items-center'"),
            )
            .with(
                "VStack",
                ComponentSpec::new("div").with_attributes("className='flex flex-col items-center'"),
            )
            .with("Text", ComponentSpec::new("p"))
            .with(
                "Button",
                ComponentSpec::new("button").with_attributes("className='px-2 py-1 border'"),
            )
    }
}

impl ComponentRegistry {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Shared instance of the default components.
    pub fn builtin() -> &'static ComponentRegistry {
        static BUILTIN: OnceLock<ComponentRegistry> = OnceLock::new();
        BUILTIN.get_or_init(ComponentRegistry::default)
    }

    /// Add or replace an entry.
    pub fn with(mut self, name: impl Into<String>, spec: ComponentSpec) -> Self {
        self.entries.insert(name.into(), spec);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ComponentSpec> {
        self.entries.get(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
