use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::page::{PageInfo, PaginatedResult};
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::value_objects::ProductId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl ProductDto {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.price,
            self.stock,
            self.is_active,
            self.created_at,
        )
    }
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            stock: product.stock,
            is_active: product.is_active,
            created_at: product.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfoDto {
    pub total: u64,
    pub page: u32,
    pub last_page: u32,
}

impl PageInfoDto {
    pub fn into_domain(self) -> PageInfo {
        PageInfo::new(self.total, self.page, self.last_page)
    }
}

/// Body of `GET /products?page={n}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponseDto {
    pub data: Vec<ProductDto>,
    pub page_info: PageInfoDto,
}

impl PaginatedResponseDto {
    pub fn into_domain(self) -> PaginatedResult {
        PaginatedResult::new(
            self.data.into_iter().map(|p| p.into_domain()).collect(),
            self.page_info.into_domain(),
        )
    }
}

/// Body of `POST /products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

impl From<&CreateProductParams> for CreateProductRequest {
    fn from(params: &CreateProductParams) -> Self {
        Self {
            name: params.name.clone(),
            price: params.price,
            stock: params.stock,
        }
    }
}
