use serde::Serialize;
use yew::prelude::*;

use crate::config;
use crate::content::{
    Testimonial, ALUMNI_RATING, CITY, DISTRICT, FOUNDING_YEAR, POSTAL_CODE, STREET_ADDRESS,
    TESTIMONIALS,
};

#[derive(Serialize)]
struct Organization {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    telephone: String,
    #[serde(rename = "foundingDate")]
    founding_date: String,
    address: PostalAddress,
    #[serde(rename = "aggregateRating")]
    aggregate_rating: AggregateRating,
    review: Vec<Review>,
}

#[derive(Serialize)]
struct PostalAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "streetAddress")]
    street_address: String,
    #[serde(rename = "addressLocality")]
    locality: &'static str,
    #[serde(rename = "postalCode")]
    postal_code: &'static str,
    #[serde(rename = "addressCountry")]
    country: &'static str,
}

#[derive(Serialize)]
struct AggregateRating {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "ratingValue")]
    rating_value: f32,
    #[serde(rename = "bestRating")]
    best_rating: u8,
    #[serde(rename = "reviewCount")]
    review_count: usize,
}

#[derive(Serialize)]
struct Review {
    #[serde(rename = "@type")]
    kind: &'static str,
    author: Person,
    #[serde(rename = "reviewBody")]
    body: &'static str,
}

#[derive(Serialize)]
struct Person {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(rename = "jobTitle")]
    job_title: &'static str,
}

impl From<&Testimonial> for Review {
    fn from(testimonial: &Testimonial) -> Self {
        Review {
            kind: "Review",
            author: Person {
                kind: "Person",
                name: testimonial.name,
                job_title: testimonial.role,
            },
            body: testimonial.quote,
        }
    }
}

fn organization() -> Organization {
    Organization {
        context: "https://schema.org",
        kind: "EducationalOrganization",
        name: config::BRAND_NAME,
        telephone: format!("+{}", config::WHATSAPP_NUMBER),
        founding_date: FOUNDING_YEAR.to_string(),
        address: PostalAddress {
            kind: "PostalAddress",
            street_address: format!("{}, {}", STREET_ADDRESS, DISTRICT),
            locality: CITY,
            postal_code: POSTAL_CODE,
            country: "ID",
        },
        aggregate_rating: AggregateRating {
            kind: "AggregateRating",
            rating_value: ALUMNI_RATING,
            best_rating: 5,
            review_count: TESTIMONIALS.len(),
        },
        review: TESTIMONIALS.iter().map(Review::from).collect(),
    }
}

/// schema.org description of the business for search engines.
pub fn structured_data() -> String {
    // Only string and number fields, serialization cannot fail
    serde_json::to_string(&organization()).unwrap_or_default()
}

#[function_component(StructuredData)]
pub fn structured_data_script() -> Html {
    html! {
        <script type="application/ld+json">{structured_data()}</script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn describes_the_school() {
        let doc: Value = serde_json::from_str(&structured_data()).unwrap();
        assert_eq!(doc["@context"], "https://schema.org");
        assert_eq!(doc["@type"], "EducationalOrganization");
        assert_eq!(doc["name"], "LinguistPro");
        assert_eq!(doc["telephone"], "+6281234567890");
        assert_eq!(doc["foundingDate"], "2015");
        assert_eq!(doc["address"]["postalCode"], "12110");
        assert_eq!(doc["address"]["addressLocality"], "Jakarta Selatan");
    }

    #[test]
    fn reviews_follow_testimonial_order() {
        let doc: Value = serde_json::from_str(&structured_data()).unwrap();
        let authors: Vec<_> = doc["review"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["author"]["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(authors, ["Andini Putri", "Budi Santoso", "Rizky Ramadhan"]);
        assert_eq!(doc["aggregateRating"]["reviewCount"], 3);
        assert_eq!(doc["aggregateRating"]["bestRating"], 5);
    }
}
