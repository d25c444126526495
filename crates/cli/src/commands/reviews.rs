//! Review commands.

use tracing::info;

use warung_core::{ProductId, ReviewId};
use warung_storefront::services::ReviewService;
use warung_storefront::services::reviews::{NewReview, ReviewQuery, ReviewSort};

fn parse_sort(sort: &str) -> Result<ReviewSort, String> {
    match sort {
        "newest" => Ok(ReviewSort::Newest),
        "oldest" => Ok(ReviewSort::Oldest),
        "rating-high" => Ok(ReviewSort::RatingHigh),
        "rating-low" => Ok(ReviewSort::RatingLow),
        _ => Err(format!("invalid sort: {sort}")),
    }
}

/// List reviews with optional filters.
///
/// # Errors
///
/// Returns an error for an unknown sort name.
pub fn list(
    search: Option<String>,
    rating: Option<u8>,
    sort: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let service = ReviewService::new(state.store());

    let stats = service.stats();
    info!(
        "{} reviews, average {:.1} stars",
        stats.total, stats.average
    );

    let reviews = service.query(&ReviewQuery {
        search,
        rating,
        sort: parse_sort(sort)?,
    });
    for review in reviews {
        info!(
            "[{}] {} - {} stars - {} ({} found this helpful)",
            review.id,
            review.product_name,
            review.rating.stars(),
            review.user_name,
            review.helpful_count()
        );
        info!("    {}", review.comment);
    }
    Ok(())
}

/// Write a review.
///
/// # Errors
///
/// Returns an error if the review service refuses the submission.
pub fn add(
    product: &str,
    rating: u8,
    comment: String,
    photos: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let review = ReviewService::new(state.store()).submit(NewReview {
        product_id: ProductId::new(product),
        rating,
        comment,
        photos,
    })?;

    info!(
        "Review {} submitted for {} ({} stars)",
        review.id,
        review.product_name,
        review.rating.stars()
    );
    Ok(())
}

/// Mark a review as helpful.
///
/// # Errors
///
/// Returns an error without a session or for an unknown review ID.
pub fn vote(review: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = super::storefront()?;
    let counted = ReviewService::new(state.store()).vote_helpful(&ReviewId::new(review))?;

    if counted {
        info!("Vote counted");
    } else {
        info!("You already voted on this review");
    }
    Ok(())
}
