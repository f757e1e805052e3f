#[derive(PartialEq, Debug, Clone)]
pub enum TemplatePart {
    Literal(String),
    Variable(String),
}

/// A message body with `{{ name }}` placeholders.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Template {
    pub parts: Vec<TemplatePart>,
}
