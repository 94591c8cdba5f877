//! Technical sheet assembly.
//!
//! A technical sheet is a transient, production-ready projection of an
//! approved design: nothing here is persisted, and the function is pure --
//! the API layer loads the design with its relations and the approving
//! review, then hands the pieces to [`TechnicalSheet::assemble`].
//!
//! The print area model is deliberately simple: physical dimensions scale
//! linearly with the stamp's scale factor against a fixed base region.
//! There is no bounds clamping, no rotation-aware bounding box, and no
//! per-product base dimensions.

use serde::Serialize;

use crate::transform::Transforms;
use crate::types::{DbId, Timestamp};

/// Base print region width, in centimeters.
pub const BASE_PRINT_WIDTH_CM: f64 = 30.0;

/// Base print region height, in centimeters.
pub const BASE_PRINT_HEIGHT_CM: f64 = 40.0;

/// The only supported print position.
pub const PRINT_POSITION: &str = "center-front";

/// Quantity quoted when no order information exists yet.
pub const DEFAULT_ESTIMATED_QUANTITY: i32 = 1;

/// Notes fallback when the approving review carried no comment.
pub const DEFAULT_PRODUCTION_NOTES: &str = "No additional notes";

/// Computed physical dimensions of the stamp region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintArea {
    /// Width in centimeters.
    pub width: f64,
    /// Height in centimeters.
    pub height: f64,
    pub position: &'static str,
}

/// Width and height scale linearly with the stamp's x/y scale factors.
pub fn compute_print_area(transforms: &Transforms) -> PrintArea {
    PrintArea {
        width: BASE_PRINT_WIDTH_CM * transforms.scale.x,
        height: BASE_PRINT_HEIGHT_CM * transforms.scale.y,
        position: PRINT_POSITION,
    }
}

/// Product summary embedded in a technical sheet.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub id: DbId,
    pub name: String,
    pub category: String,
    /// Thumbnail URL doubling as the preview base model reference.
    pub base_model: String,
}

/// Client (design owner) summary embedded in a technical sheet.
#[derive(Debug, Clone, Serialize)]
pub struct ClientSummary {
    pub id: DbId,
    pub name: Option<String>,
    pub email: String,
}

/// Print specifications for the production floor.
#[derive(Debug, Clone, Serialize)]
pub struct Specifications {
    pub color: String,
    pub stamp_image_url: String,
    pub transforms: Transforms,
    pub print_area: PrintArea,
}

/// Production block: quantity and reviewer notes.
#[derive(Debug, Clone, Serialize)]
pub struct Production {
    pub estimated_quantity: i32,
    pub notes: String,
}

/// Production summary derived from an approved design and its approving
/// review. Regenerated per request; never stored.
#[derive(Debug, Clone, Serialize)]
pub struct TechnicalSheet {
    pub design_id: DbId,
    pub approved_at: Timestamp,
    pub product: ProductSummary,
    pub specifications: Specifications,
    pub client: ClientSummary,
    pub production: Production,
}

impl TechnicalSheet {
    /// Assemble a sheet from an approved design's data.
    ///
    /// `approved_at` and `review_comment` come from the approving review;
    /// the print area is computed from `transforms`.
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        design_id: DbId,
        approved_at: Timestamp,
        product: ProductSummary,
        client: ClientSummary,
        color: String,
        stamp_image_url: String,
        transforms: Transforms,
        review_comment: Option<String>,
    ) -> TechnicalSheet {
        let print_area = compute_print_area(&transforms);

        let notes = review_comment
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PRODUCTION_NOTES.to_string());

        TechnicalSheet {
            design_id,
            approved_at,
            product,
            specifications: Specifications {
                color,
                stamp_image_url,
                transforms,
                print_area,
            },
            client,
            production: Production {
                estimated_quantity: DEFAULT_ESTIMATED_QUANTITY,
                notes,
            },
        }
    }
}
