use crate::model::selection::Candidate;

/// A VK community known to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: String,
    /// Platform-side identifier (numeric string).
    pub vk_id: String,
    pub name: String,
    pub category: String,
    /// Member count, present only on records that came with one.
    pub members: Option<u64>,
}

impl Group {
    pub fn new(id: &str, vk_id: &str, name: &str, category: &str) -> Self {
        Group {
            id: id.to_string(),
            vk_id: vk_id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            members: None,
        }
    }

    pub fn with_members(mut self, members: u64) -> Self {
        self.members = Some(members);
        self
    }
}

impl Candidate for Group {
    fn key(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        self.name.clone()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

/// A VK user whose posts can be targeted by the liking wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub vk_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn new(id: &str, vk_id: &str, first_name: &str, last_name: &str) -> Self {
        User {
            id: id.to_string(),
            vk_id: vk_id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Candidate for User {
    fn key(&self) -> &str {
        &self.id
    }

    /// Users are searched by full name; they carry no category facet.
    fn search_text(&self) -> String {
        self.full_name()
    }

    fn category(&self) -> Option<&str> {
        None
    }
}

/// Longest post body the platform accepts.
pub const POST_TEXT_LIMIT: usize = 4096;

/// A prepared post that a publishing task would push to groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub category: String,
    pub text: String,
    pub has_media: bool,
}

impl Post {
    pub fn new(id: &str, category: &str, text: &str, has_media: bool) -> Self {
        Post {
            id: id.to_string(),
            category: category.to_string(),
            text: text.to_string(),
            has_media,
        }
    }
}

impl Candidate for Post {
    fn key(&self) -> &str {
        &self.id
    }

    /// Posts are searched by body text.
    fn search_text(&self) -> String {
        self.text.clone()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

/// A category row in the records screen. Just a name; no uniqueness rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: &str, name: &str) -> Self {
        Category {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// A token row in the records screen (masked display value, not the live
/// stored token).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub id: String,
    pub token: String,
    pub added: String,
}

impl TokenRecord {
    pub fn new(id: &str, token: &str, added: &str) -> Self {
        TokenRecord {
            id: id.to_string(),
            token: token.to_string(),
            added: added.to_string(),
        }
    }
}
