//! Product reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, ReviewId, UserId};

/// Error for an out-of-range rating.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("rating must be between 1 and 5, got {0}")]
pub struct RatingError(pub u8);

/// A star rating, 1 to 5 inclusive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Create a rating, rejecting values outside 1..=5.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError`] if `stars` is 0 or greater than 5.
    pub const fn new(stars: u8) -> Result<Self, RatingError> {
        if stars >= 1 && stars <= 5 {
            Ok(Self(stars))
        } else {
            Err(RatingError(stars))
        }
    }

    /// The number of stars.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A customer review of a product.
///
/// Product and author are weak references by ID; the display fields are
/// denormalized copies so a review still renders after the product or
/// account is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Unique review ID.
    pub id: ReviewId,
    /// Reviewed product.
    pub product_id: ProductId,
    /// Product name at review time.
    pub product_name: String,
    /// Review author.
    pub user_id: UserId,
    /// Author name at review time.
    pub user_name: String,
    /// Author avatar reference at review time.
    pub avatar: Option<String>,
    /// Author profile label at review time.
    pub profile_status: String,
    /// Star rating.
    pub rating: Rating,
    /// Free-text comment.
    pub comment: String,
    /// Photo references attached to the review.
    pub photos: Vec<String>,
    /// When the review was written.
    pub created_at: DateTime<Utc>,
    /// Who found this review helpful. One entry per voter.
    helpful_voters: Vec<UserId>,
}

impl Review {
    /// Create a review with no votes yet.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: ReviewId,
        product_id: ProductId,
        product_name: String,
        user_id: UserId,
        user_name: String,
        avatar: Option<String>,
        profile_status: String,
        rating: Rating,
        comment: String,
        photos: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product_id,
            product_name,
            user_id,
            user_name,
            avatar,
            profile_status,
            rating,
            comment,
            photos,
            created_at,
            helpful_voters: Vec::new(),
        }
    }

    /// Record a helpful vote from `voter`.
    ///
    /// Returns `true` if the vote was counted, `false` if this voter had
    /// already voted (at most one vote per actor).
    pub fn record_helpful_vote(&mut self, voter: &UserId) -> bool {
        if self.helpful_voters.contains(voter) {
            return false;
        }
        self.helpful_voters.push(voter.clone());
        true
    }

    /// Number of distinct voters who found this review helpful.
    #[must_use]
    pub fn helpful_count(&self) -> usize {
        self.helpful_voters.len()
    }
}
