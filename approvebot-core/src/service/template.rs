use std::{str::FromStr, sync::LazyLock};

use anyhow::{anyhow, ensure};
use regex::Regex;

use crate::model::{Template, TemplatePart, TemplateValues};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(.*?)\s*\}\}").unwrap());

const POSITIONAL_VERB: &str = "%s";

impl FromStr for Template {
    type Err = anyhow::Error;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        let mut parts = Vec::new();
        let mut cursor = 0;

        for captures in PLACEHOLDER_REGEX.captures_iter(val) {
            let whole = captures
                .get(0)
                .ok_or_else(|| anyhow!("Could not find whole placeholder"))?;
            let name = captures
                .get(1)
                .ok_or_else(|| anyhow!("Could not find captured placeholder name"))?
                .as_str();
            ensure!(
                !name.is_empty(),
                "Empty placeholder at offset {}",
                whole.start()
            );

            if whole.start() > cursor {
                parts.push(TemplatePart::Literal(val[cursor..whole.start()].to_owned()));
            }
            parts.push(TemplatePart::Variable(name.to_owned()));
            cursor = whole.end();
        }

        if cursor < val.len() {
            parts.push(TemplatePart::Literal(val[cursor..].to_owned()));
        }

        Ok(Self { parts })
    }
}

impl Template {
    /// Reads a printf-style template whose `%s` verbs are filled by `names`, in order.
    pub fn positional(val: &str, names: &[&str]) -> anyhow::Result<Self> {
        let segments = val.split(POSITIONAL_VERB).collect::<Vec<_>>();
        let verbs = segments.len() - 1;
        ensure!(
            verbs <= names.len(),
            "Template has {verbs} `{POSITIONAL_VERB}` verbs but only {} values are available",
            names.len()
        );

        let mut parts = Vec::new();
        for (index, segment) in segments.into_iter().enumerate() {
            if index > 0 {
                parts.push(TemplatePart::Variable(names[index - 1].to_owned()));
            }
            if !segment.is_empty() {
                parts.push(TemplatePart::Literal(segment.to_owned()));
            }
        }

        Ok(Self { parts })
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|part| match part {
            TemplatePart::Variable(name) => Some(name.as_str()),
            TemplatePart::Literal(_) => None,
        })
    }

    pub fn render(&self, values: &TemplateValues) -> anyhow::Result<String> {
        let mut result = String::new();

        self.render_in(values, &mut result)?;

        Ok(result)
    }

    pub fn render_in(&self, values: &TemplateValues, buffer: &mut String) -> anyhow::Result<()> {
        for part in &self.parts {
            match part {
                TemplatePart::Literal(literal) => {
                    buffer.push_str(literal);
                }
                TemplatePart::Variable(name) => {
                    let value = values
                        .get(name)
                        .ok_or_else(|| anyhow!("Template value `{name}` is not defined"))?;
                    buffer.push_str(value);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn literal(value: &str) -> TemplatePart {
        TemplatePart::Literal(value.to_owned())
    }

    fn variable(name: &str) -> TemplatePart {
        TemplatePart::Variable(name.to_owned())
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(Template::default(), "".parse::<Template>().unwrap());
    }

    #[test]
    fn test_no_variables() {
        assert_eq!(
            vec![literal("Hello, world!")],
            "Hello, world!".parse::<Template>().unwrap().parts
        );
    }

    #[test]
    fn test_single_variable() {
        assert_eq!(
            vec![variable("user_name")],
            "{{user_name}}".parse::<Template>().unwrap().parts
        );
    }

    #[test]
    fn test_multiple_variables_with_inner_spaces() {
        let template = "{{ user_name }} <{{  user_email }}> asked\nfor access: {{issue_url}}"
            .parse::<Template>()
            .unwrap();
        assert_eq!(
            vec![
                variable("user_name"),
                literal(" <"),
                variable("user_email"),
                literal("> asked\nfor access: "),
                variable("issue_url"),
            ],
            template.parts
        );
        assert_eq!(
            vec!["user_name", "user_email", "issue_url"],
            template.variables().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_empty_placeholder_fails() {
        let error = "Hi {{ }}".parse::<Template>().unwrap_err();
        assert_eq!("Empty placeholder at offset 3", error.to_string());
    }

    #[test]
    fn test_positional_template() {
        let template =
            Template::positional("%s (%s) asked: %s", &["user_name", "user_email", "issue_url"])
                .unwrap();
        assert_eq!(
            vec![
                variable("user_name"),
                literal(" ("),
                variable("user_email"),
                literal(") asked: "),
                variable("issue_url"),
            ],
            template.parts
        );
    }

    #[test]
    fn test_positional_template_with_too_many_verbs() {
        let error = Template::positional("%s %s", &["user_name"]).unwrap_err();
        assert_eq!(
            "Template has 2 `%s` verbs but only 1 values are available",
            error.to_string()
        );
    }

    #[test]
    fn test_render_empty_string() {
        let template = Template::default();
        assert_eq!("", template.render(&TemplateValues::default()).unwrap());
    }

    #[test]
    fn test_render_multiple_variables() {
        let template = "{{ user_name }} ({{ user_email }}) needs {{ user_name }}'s access"
            .parse::<Template>()
            .unwrap();
        let mut values = TemplateValues::default();
        values.set("user_name", "Jane Doe");
        values.set("user_email", "jane@b.com");
        assert_eq!(
            "Jane Doe (jane@b.com) needs Jane Doe's access",
            template.render(&values).unwrap()
        );
    }

    #[test]
    fn test_render_missing_variable() {
        let template = "Hello, {{ name }}!".parse::<Template>().unwrap();
        let error = template.render(&TemplateValues::default()).unwrap_err();
        assert_eq!("Template value `name` is not defined", error.to_string());
    }
}
