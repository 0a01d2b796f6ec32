use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A product offered by a seller.
///
/// Field names are serialized verbatim as `ID`, `SellerID`, `Description`
/// and `Price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique product identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// Identifier of the owning seller
    #[serde(rename = "SellerID")]
    pub seller_id: String,
    /// Free-text description
    #[serde(rename = "Description")]
    pub description: String,
    /// Unit price
    #[serde(rename = "Price")]
    pub price: f64,
}

/// Query parameters for listing a seller's products
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SellerQuery {
    /// Seller whose products are listed (required)
    pub seller_id: Option<String>,
}

impl SellerQuery {
    /// Builds the query from decoded `key=value` pairs.
    ///
    /// A repeated `seller_id` keeps its first value.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let seller_id = pairs
            .into_iter()
            .find(|(key, _)| key == "seller_id")
            .map(|(_, value)| value);

        Self { seller_id }
    }

    /// The seller id, or `None` when the parameter is absent or empty.
    pub fn seller_id(&self) -> Option<&str> {
        self.seller_id.as_deref().filter(|id| !id.is_empty())
    }
}
