use serde::{Deserialize, Serialize};

/// Reseña de un apartamento
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub apartment_id: String,
    /// Puntuación 1..=5 (validada en el formulario, el backend la re-valida)
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct CreateReviewRequest {
    pub apartment_id: String,
    pub rating: u8,
    pub comment: String,
}

/// Media de puntuación para la cabecera del bloque de reseñas
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    Some(f64::from(sum) / reviews.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review {
            id: format!("rv-{rating}"),
            user_id: "u-1".to_string(),
            user_name: "Ana".to_string(),
            apartment_id: "ap-1".to_string(),
            rating,
            comment: String::new(),
            date: "2026-08-01".to_string(),
        }
    }

    #[test]
    fn average_of_empty_is_none() {
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn average_is_arithmetic_mean() {
        let reviews = vec![review(5), review(4), review(3)];
        assert_eq!(average_rating(&reviews), Some(4.0));
    }
}
