use serde::{Deserialize, Serialize};

/// Opaque scan session token issued by the recipe service.
///
/// Threaded unchanged from the scan response into the generation request so
/// the backend can correlate the two calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

/// Unique recipe identifier issued by the recipe service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeId(String);

/// User identity issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

macro_rules! impl_id {
    ($($id:ident),+) => {
        $(
            impl $id {
                pub fn new(value: impl Into<String>) -> Self {
                    Self(value.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }

                pub fn into_inner(self) -> String {
                    self.0
                }
            }

            impl std::fmt::Display for $id {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<String> for $id {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }

            impl From<&str> for $id {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }
        )+
    };
}

impl_id!(SessionId, RecipeId, UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_as_plain_strings() {
        let id = RecipeId::from("r-42");
        assert_eq!(id.as_str(), "r-42");
        assert_eq!(id.to_string(), "r-42");

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"r-42\"");
        let back: RecipeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
