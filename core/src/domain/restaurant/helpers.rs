use std::collections::BTreeMap;

use crate::domain::{
    common::generate_timestamp,
    restaurant::{
        entities::RestaurantRecord,
        value_objects::{DatasetMetadata, QualityDistribution},
    },
};

pub const UNKNOWN_DISTANCE_CATEGORY: &str = "정보없음";
pub const METADATA_SCHEMA_VERSION: &str = "1.0";

const GENRE_KEYWORDS: &[(&str, &[&str])] = &[
    ("한식", &["한식", "김치", "된장", "불고기", "비빔밥"]),
    ("일식", &["일식", "초밥", "라멘", "우동", "돈카츠"]),
    ("중식", &["중식", "짜장", "짬뽕", "탕수육", "마파두부"]),
    ("양식", &["양식", "파스타", "스테이크", "피자", "햄버거"]),
    ("카페/디저트", &["카페", "커피", "디저트", "케이크", "빵"]),
    ("분식/간식", &["분식", "떡볶이", "순대", "튀김", "김밥"]),
];

/// Map a free-form category from the source site onto a cuisine tag.
pub fn classify_food_genre(category: &str) -> String {
    let category = category.to_lowercase();

    GENRE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| category.contains(k)))
        .map(|(genre, _)| genre.to_string())
        .unwrap_or_else(|| "기타".to_string())
}

pub fn distance_category_for(distance_meters: f64) -> &'static str {
    if distance_meters <= 200.0 {
        "매우 가까움"
    } else if distance_meters <= 500.0 {
        "가까움"
    } else if distance_meters <= 1000.0 {
        "보통"
    } else {
        "조금 멀음"
    }
}

pub fn naver_map_link(name: &str) -> String {
    format!(
        "https://map.naver.com/p/search/{}",
        urlencoding::encode(name)
    )
}

/// Completeness score in 0..=100 weighted on rating, review volume and address.
pub fn quality_score(record: &RestaurantRecord) -> f64 {
    let mut score = 0.0;

    if let Some(rating) = record.rating.filter(|r| *r > 0.0) {
        score += (rating * 8.0).min(40.0);
    }

    if let Some(reviews) = record.review_count.filter(|c| *c > 0) {
        score += (reviews as f64 / 10.0).min(30.0);
    }

    if record
        .address
        .as_deref()
        .is_some_and(|a| a.chars().count() > 5)
    {
        score += 30.0;
    }

    score.min(100.0)
}

/// Fill derivable fields once, at load time. `walking_minutes` is never derived:
/// a record without one must stay out of any numeric walking filter.
pub fn normalize_record(mut record: RestaurantRecord) -> RestaurantRecord {
    if record.cuisine.trim().is_empty() {
        record.cuisine = record
            .category
            .as_deref()
            .map(classify_food_genre)
            .unwrap_or_else(|| "기타".to_string());
    }

    if record.distance_category.is_none() {
        record.distance_category = record
            .distance_meters
            .map(|m| distance_category_for(m).to_string());
    }

    if record.map_link.is_none() && !record.name.trim().is_empty() {
        record.map_link = Some(naver_map_link(&record.name));
    }

    record
}

pub fn build_dataset_metadata(records: &[RestaurantRecord]) -> DatasetMetadata {
    let mut genres = BTreeMap::new();
    let mut distances = BTreeMap::new();
    let mut quality = QualityDistribution::default();

    for record in records {
        *genres.entry(record.cuisine.clone()).or_insert(0) += 1;

        let distance = record
            .distance_category
            .clone()
            .unwrap_or_else(|| UNKNOWN_DISTANCE_CATEGORY.to_string());
        *distances.entry(distance).or_insert(0) += 1;

        match quality_score(record) {
            s if s >= 80.0 => quality.excellent += 1,
            s if s >= 60.0 => quality.good += 1,
            s if s >= 40.0 => quality.fair += 1,
            _ => quality.poor += 1,
        }
    }

    let (created_at, _) = generate_timestamp();

    DatasetMetadata {
        total_restaurants: records.len(),
        data_quality_distribution: quality,
        food_genre_distribution: genres,
        distance_distribution: distances,
        created_at,
        schema_version: METADATA_SCHEMA_VERSION.to_string(),
    }
}
