use serde::Deserialize;

/// The parts of a GitHub `issue_comment` event payload the bot reads.
#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct Event {
    pub issue: Issue,
    #[serde(default)]
    pub organization: Organization,
    pub repository: Repository,
    #[serde(default)]
    pub comment: Option<Comment>,
}

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct Issue {
    pub number: u64,
    pub url: String,
}

#[derive(Deserialize, PartialEq, Debug, Clone, Default)]
pub struct Organization {
    pub login: String,
}

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct Repository {
    pub name: String,
}

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct Comment {
    pub body: String,
}

impl Event {
    pub fn comment_body(&self) -> Option<&str> {
        self.comment
            .as_ref()
            .map(|comment| comment.body.as_str())
            .filter(|body| !body.trim().is_empty())
    }
}
