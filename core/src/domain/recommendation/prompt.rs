use std::fmt::Write;

use crate::domain::{
    recommendation::entities::CandidateList, restaurant::entities::RestaurantRecord,
};

pub const RECOMMENDATION_MARKER: &str = "RECOMMENDATION";
pub const REASON_MARKER: &str = "REASON";
pub const TIP_MARKER: &str = "TIPS";

const UNDECIDED: &str = "미정";
const NO_INFO: &str = "정보 없음";

/// Render one numbered candidate line. `position` is 1-based.
fn render_candidate(out: &mut String, position: usize, record: &RestaurantRecord) {
    let distance = record
        .distance_meters
        .map(|m| format!("{}m", format_number(m)))
        .unwrap_or_else(|| UNDECIDED.to_string());
    let walking = record
        .walking_minutes
        .map(|m| format!("{}분", format_number(m)))
        .unwrap_or_else(|| UNDECIDED.to_string());
    let rating = record
        .rating
        .map(|r| format!("{r:.1}"))
        .unwrap_or_else(|| NO_INFO.to_string());
    let dish = record
        .signature_dish
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(NO_INFO);

    let _ = writeln!(
        out,
        "{position}. {} ({}) - 거리: {distance}, 도보: {walking}, 평점: {rating}, 대표메뉴: {dish}",
        record.name, record.cuisine
    );
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Build the full prompt. Pure in `(user_text, candidates)`.
pub fn build_recommendation_prompt(user_text: &str, candidates: &CandidateList) -> String {
    let mut list = String::new();
    for (index, record) in candidates.iter().enumerate() {
        render_candidate(&mut list, index + 1, record);
    }

    format!(
        "당신은 점심 식당을 골라주는 도우미입니다.\n\
         \n\
         사용자 요청: \"{user_text}\"\n\
         \n\
         후보 식당 목록:\n\
         {list}\
         \n\
         규칙:\n\
         - 반드시 위 번호 목록 안에서만 한 곳을 고르세요. 목록에 없는 식당은 추천하지 마세요.\n\
         - 아래 세 줄 형식으로만 답하세요. 다른 문장은 쓰지 마세요.\n\
         \n\
         {RECOMMENDATION_MARKER}: [식당 번호]\n\
         {REASON_MARKER}: [추천 이유 한두 문장]\n\
         {TIP_MARKER}: [방문 팁 한 문장]\n"
    )
}
