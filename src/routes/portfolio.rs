use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::HttpResponse;

use crate::domain::PortfolioDocument;
use crate::portfolio_pdf::render_portfolio;
use crate::utils::ApiResponse;

#[tracing::instrument(name = "Generating portfolio PDF")]
pub async fn generate_pdf() -> HttpResponse {
    portfolio_download("Innovative_Financial_Dashboard_Project.pdf")
}

#[tracing::instrument(name = "Downloading portfolio PDF")]
pub async fn download_portfolio_pdf() -> HttpResponse {
    portfolio_download("Innovative_Financial_Dashboard_App.pdf")
}

fn portfolio_download(filename: &str) -> HttpResponse {
    match render_portfolio(&PortfolioDocument::default()) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(filename.to_string())],
            })
            .body(bytes),
        Err(e) => {
            tracing::error!(error = ?e, "Failed to render portfolio PDF");
            ApiResponse::internal_error("Failed to generate PDF. Please try again.")
        }
    }
}
