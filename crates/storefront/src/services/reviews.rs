//! Product reviews.
//!
//! Writing a review requires a signed-in session and a completed (`Selesai`)
//! order containing the product - the same gate the product page uses to
//! decide whether to show the review form. Helpful votes are deduplicated
//! per voter.

use chrono::Utc;
use tracing::info;

use warung_core::{
    Order, OrderStatus, ProductId, Rating, RatingError, Review, ReviewId, UserProfile,
};
use warung_storage::{KvStore, StoreError, keys};

use super::auth::AuthService;
use super::catalog::CatalogService;

/// Errors that refuse a review operation.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    /// The session is not signed in.
    #[error("reviews require a signed-in session")]
    NotAuthenticated,

    /// Rating outside 1-5.
    #[error(transparent)]
    InvalidRating(#[from] RatingError),

    /// The product does not exist in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// No completed order contains this product.
    #[error("product can only be reviewed after a completed order")]
    NotPurchased,

    /// The review has no text.
    #[error("review comment cannot be empty")]
    EmptyComment,

    /// The referenced review does not exist.
    #[error("unknown review: {0}")]
    UnknownReview(ReviewId),

    /// Store write failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// A review as submitted by the customer.
#[derive(Debug, Clone)]
pub struct NewReview {
    /// Product being reviewed.
    pub product_id: ProductId,
    /// Star rating, 1-5.
    pub rating: u8,
    /// Free-text comment.
    pub comment: String,
    /// Attached photo references.
    pub photos: Vec<String>,
}

/// How to sort a review listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSort {
    /// Newest first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Highest rating first, more helpful votes breaking ties.
    RatingHigh,
    /// Lowest rating first, more helpful votes breaking ties.
    RatingLow,
}

/// Filters and ordering for a review listing.
#[derive(Debug, Clone, Default)]
pub struct ReviewQuery {
    /// Case-insensitive substring over comment, author, and product name.
    pub search: Option<String>,
    /// Only reviews with exactly this many stars.
    pub rating: Option<u8>,
    /// Ordering.
    pub sort: ReviewSort,
}

/// Aggregate rating statistics for the reviews page header.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewStats {
    /// Number of reviews.
    pub total: usize,
    /// Mean rating, 0.0 when there are no reviews.
    pub average: f64,
    /// Review counts indexed by star value; `counts[0]` is 1-star.
    pub counts: [usize; 5],
}

/// Service for listing, submitting, and voting on reviews.
pub struct ReviewService<'a> {
    store: &'a KvStore,
}

impl<'a> ReviewService<'a> {
    /// Create the service.
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// All reviews, in submission order.
    #[must_use]
    pub fn reviews(&self) -> Vec<Review> {
        self.store.get_or_default(keys::REVIEWS)
    }

    /// Reviews matching `query`, ordered per its sort.
    #[must_use]
    pub fn query(&self, query: &ReviewQuery) -> Vec<Review> {
        let mut reviews = self.reviews();

        if let Some(search) = &query.search {
            let needle = search.to_lowercase();
            reviews.retain(|r| {
                r.comment.to_lowercase().contains(&needle)
                    || r.user_name.to_lowercase().contains(&needle)
                    || r.product_name.to_lowercase().contains(&needle)
            });
        }
        if let Some(stars) = query.rating {
            reviews.retain(|r| r.rating.stars() == stars);
        }

        match query.sort {
            ReviewSort::Newest => reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            ReviewSort::Oldest => reviews.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            ReviewSort::RatingHigh => reviews.sort_by(|a, b| {
                b.rating
                    .cmp(&a.rating)
                    .then(b.helpful_count().cmp(&a.helpful_count()))
            }),
            ReviewSort::RatingLow => reviews.sort_by(|a, b| {
                a.rating
                    .cmp(&b.rating)
                    .then(b.helpful_count().cmp(&a.helpful_count()))
            }),
        }
        reviews
    }

    /// Reviews for one product, newest first.
    #[must_use]
    pub fn for_product(&self, product_id: &ProductId) -> Vec<Review> {
        let mut reviews = self.reviews();
        reviews.retain(|r| r.product_id == *product_id);
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reviews
    }

    /// Aggregate statistics over all reviews.
    #[must_use]
    pub fn stats(&self) -> ReviewStats {
        let reviews = self.reviews();
        let total = reviews.len();
        let mut counts = [0usize; 5];
        let mut sum = 0u32;
        for review in &reviews {
            let stars = review.rating.stars();
            sum += u32::from(stars);
            if let Some(slot) = counts.get_mut(usize::from(stars) - 1) {
                *slot += 1;
            }
        }
        #[allow(clippy::cast_precision_loss)] // review counts stay tiny
        let average = if total == 0 {
            0.0
        } else {
            f64::from(sum) / total as f64
        };
        ReviewStats {
            total,
            average,
            counts,
        }
    }

    /// Whether the signed-in user may review `product_id`: some completed
    /// order must contain the product.
    #[must_use]
    pub fn can_review(&self, product_id: &ProductId) -> bool {
        let orders: Vec<Order> = self.store.get_or_default(keys::ORDERS);
        orders
            .iter()
            .any(|o| o.status == OrderStatus::Selesai && o.contains_product(product_id))
    }

    /// Submit a review.
    ///
    /// # Errors
    ///
    /// Refused without a session, for an unknown product, for a product no
    /// completed order contains, for an out-of-range rating, or for an
    /// empty comment.
    pub fn submit(&self, new: NewReview) -> Result<Review, ReviewError> {
        let session = AuthService::new(self.store).session();
        let user = session
            .require_user()
            .map_err(|_| ReviewError::NotAuthenticated)?;

        let product = CatalogService::new(self.store)
            .product(&new.product_id)
            .ok_or_else(|| ReviewError::UnknownProduct(new.product_id.clone()))?;

        if !self.can_review(&new.product_id) {
            return Err(ReviewError::NotPurchased);
        }
        let rating = Rating::new(new.rating)?;
        if new.comment.trim().is_empty() {
            return Err(ReviewError::EmptyComment);
        }

        let review = build_review(user, &product.name, new, rating);
        let mut reviews = self.reviews();
        reviews.push(review.clone());
        self.store.set(keys::REVIEWS, &reviews)?;

        info!(review = %review.id, product = %review.product_id, "review submitted");
        Ok(review)
    }

    /// Record a helpful vote from the signed-in user.
    ///
    /// Returns `true` if the vote counted, `false` if this user had already
    /// voted on the review.
    ///
    /// # Errors
    ///
    /// Refused without a session or for an unknown review ID.
    pub fn vote_helpful(&self, review_id: &ReviewId) -> Result<bool, ReviewError> {
        let session = AuthService::new(self.store).session();
        let voter = session
            .require_user()
            .map_err(|_| ReviewError::NotAuthenticated)?
            .id
            .clone();

        let mut reviews = self.reviews();
        let review = reviews
            .iter_mut()
            .find(|r| r.id == *review_id)
            .ok_or_else(|| ReviewError::UnknownReview(review_id.clone()))?;

        let counted = review.record_helpful_vote(&voter);
        if counted {
            self.store.set(keys::REVIEWS, &reviews)?;
        }
        Ok(counted)
    }
}

fn build_review(
    user: &UserProfile,
    product_name: &str,
    new: NewReview,
    rating: Rating,
) -> Review {
    Review::new(
        ReviewId::generate(),
        new.product_id,
        product_name.to_owned(),
        user.id.clone(),
        user.name.clone(),
        user.avatar.clone(),
        user.profile_status.clone(),
        rating,
        new.comment,
        new.photos,
        Utc::now(),
    )
}
