//! Product catalog API

use crate::config::resolve_branch_id;
use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use shared::Product;

/// Product listing endpoint
pub const PRODUCT_LIST_PATH: &str = "/api/Product/GetAllByBranch";

/// Query parameter carrying the branch identifier
pub const BRANCH_QUERY_PARAM: &str = "globalBranchID";

/// Source of the raw product list
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>>;
}

impl HttpClient {
    /// Fetch every product of a branch (fallback branch when blank)
    pub async fn get_product_list(&self, branch_id: Option<&str>) -> ClientResult<Vec<Product>> {
        let branch_id = resolve_branch_id(branch_id);
        if uuid::Uuid::parse_str(branch_id).is_err() {
            tracing::warn!("Branch id {} is not a UUID", branch_id);
        }

        let products: Option<Vec<Product>> = self
            .get(PRODUCT_LIST_PATH, &[(BRANCH_QUERY_PARAM, branch_id)])
            .await?;
        Ok(products.unwrap_or_default())
    }
}

/// HTTP-backed product source bound to one branch
#[derive(Debug, Clone)]
pub struct BranchCatalog {
    client: HttpClient,
    branch_id: Option<String>,
}

impl BranchCatalog {
    pub fn new(client: HttpClient, branch_id: Option<String>) -> Self {
        Self { client, branch_id }
    }
}

#[async_trait]
impl ProductSource for BranchCatalog {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        self.client.get_product_list(self.branch_id.as_deref()).await
    }
}
