use serde::{Deserialize, Serialize};

/// A parent or facilitator account belonging to a family.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: u32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub family_id: u32,
}

impl User {
    pub fn new(user_id: u32, family_id: u32, first_name: &str, last_name: &str) -> Self {
        Self {
            user_id,
            username: format!("{}.{}", first_name, last_name).to_lowercase(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: None,
            phone: None,
            family_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Family {
    pub id: u32,
    pub name: String,
    pub parents: Vec<User>,
    pub children: u32,
}

impl Family {
    pub fn new(id: u32, name: String, children: u32) -> Self {
        Self {
            id,
            name,
            parents: Vec::new(),
            children,
        }
    }

    pub fn parent(&self, user_id: u32) -> Option<&User> {
        self.parents.iter().find(|p| p.user_id == user_id)
    }
}

/// Weekly facilitation hours a family owes, scaled by enrolled children.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct GoalPolicy {
    pub hours_per_child: f64,
    pub max_hours: f64,
}

impl Default for GoalPolicy {
    fn default() -> Self {
        Self {
            hours_per_child: 2.5,
            max_hours: 5.0,
        }
    }
}

impl GoalPolicy {
    pub fn goal_for(&self, children: u32) -> f64 {
        (children as f64 * self.hours_per_child).min(self.max_hours)
    }
}
