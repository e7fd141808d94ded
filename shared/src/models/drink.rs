//! Drink Model

use serde::{Deserialize, Serialize};

use super::Keyed;

/// Drink entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Drink {
    pub id: i64,
    pub title: String,
    /// JSON array of recipe parts
    #[cfg_attr(feature = "db", sqlx(json))]
    pub recipe: Vec<RecipePart>,
}

impl Keyed for Drink {
    fn key(&self) -> i64 {
        self.id
    }
}

/// One ingredient of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePart {
    pub color: String,
    pub name: String,
    pub parts: i64,
}

/// Ingredient without proportions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeShort {
    pub color: String,
    pub name: String,
}

/// Public drink projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkShort {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<RecipeShort>,
}

impl Drink {
    /// Projection without parts
    pub fn short(&self) -> DrinkShort {
        DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe: self
                .recipe
                .iter()
                .map(|p| RecipeShort {
                    color: p.color.clone(),
                    name: p.name.clone(),
                })
                .collect(),
        }
    }

    /// Full projection
    pub fn long(&self) -> Drink {
        self.clone()
    }
}

/// A recipe is accepted as one part or a list of parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    One(RecipePart),
    Many(Vec<RecipePart>),
}

impl RecipeInput {
    pub fn into_parts(self) -> Vec<RecipePart> {
        match self {
            RecipeInput::One(part) => vec![part],
            RecipeInput::Many(parts) => parts,
        }
    }
}

/// Create drink payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrinkCreate {
    pub title: Option<String>,
    pub recipe: Option<RecipeInput>,
}

/// Update drink payload; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrinkUpdate {
    pub title: Option<String>,
    pub recipe: Option<RecipeInput>,
}
