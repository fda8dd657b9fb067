// Static vocabulary: vendor display strings, type rules, day tables.
//
// The label table is declared forward (canonical tag -> Vietnamese display
// string) and reversed once at first use. TYPE_RULES is an ordered slice on
// purpose: type inference takes the first rule whose tag set intersects the
// listing's categories, so declaration order is part of the contract.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical tag -> vendor display string. Lookups go through the lowercased
/// reverse index, so matching is case-insensitive.
pub static CATEGORY_LABELS: &[(&str, &str)] = &[
    ("restaurant", "Nhà hàng"),
    ("eatery", "Quán ăn"),
    ("hotpot", "Lẩu"),
    ("bbq", "Đồ nướng"),
    ("seafood", "Hải sản"),
    ("vegetarian", "Món chay"),
    ("fast_food", "Thức ăn nhanh"),
    ("street_food", "Ăn vặt/vỉa hè"),
    ("cafe", "Cà phê"),
    ("milk_tea", "Trà sữa"),
    ("bar", "Quán bar"),
    ("dessert", "Tráng miệng"),
    ("bakery", "Tiệm bánh"),
    ("karaoke", "Karaoke"),
    ("cinema", "Rạp chiếu phim"),
    ("spa", "Spa"),
    ("gym", "Phòng tập"),
    ("beauty", "Làm đẹp"),
    ("hotel", "Khách sạn"),
    ("fashion", "Thời trang"),
    ("convenience", "Cửa hàng tiện lợi"),
    ("pharmacy", "Nhà thuốc"),
    ("wifi", "Wifi miễn phí"),
    ("parking", "Chỗ đậu xe"),
    ("card_payment", "Thanh toán thẻ"),
    ("momo_payment", "Thanh toán MoMo"),
    ("delivery", "Giao hàng"),
    ("takeaway", "Mang đi"),
    ("outdoor_seating", "Chỗ ngồi ngoài trời"),
    ("air_conditioning", "Máy lạnh"),
    ("smoking_area", "Khu vực hút thuốc"),
    ("private_room", "Phòng riêng"),
    ("kids_area", "Khu vui chơi trẻ em"),
    ("reservation", "Nhận đặt bàn"),
    ("service", "Dịch vụ"),
    ("placeholder", "Chưa phân loại"),
    ("service_desc", "Mô tả dịch vụ"),
];

/// Internal bookkeeping tags, never emitted as listing categories.
pub static BOOKKEEPING_TAGS: &[&str] = &["service", "placeholder", "service_desc"];

/// Business type -> category tags implying it. First match wins, so more
/// specific rules must stay above broader ones.
pub static TYPE_RULES: &[(&str, &[&str])] = &[
    (
        "eatery",
        &[
            "restaurant",
            "eatery",
            "hotpot",
            "bbq",
            "seafood",
            "vegetarian",
            "fast_food",
            "street_food",
        ],
    ),
    ("drink", &["cafe", "milk_tea", "bar"]),
    ("dessert", &["dessert", "bakery"]),
    ("entertainment", &["karaoke", "cinema"]),
    ("wellness", &["spa", "gym", "beauty"]),
    ("lodging", &["hotel"]),
    ("shopping", &["fashion", "convenience", "pharmacy"]),
];

/// Vendor day-of-week code -> weekday key. The vendor counts days the
/// Vietnamese way: 2 is Monday ("thứ 2"), 8 is Sunday.
pub static DAY_CODES: &[(i64, &str)] = &[
    (2, "monday"),
    (3, "tuesday"),
    (4, "wednesday"),
    (5, "thursday"),
    (6, "friday"),
    (7, "saturday"),
    (8, "sunday"),
];

/// Lowercased Vietnamese day names as they appear in exported free text.
pub static DAY_NAMES_VI: &[(&str, &str)] = &[
    ("thứ 2", "monday"),
    ("thứ 3", "tuesday"),
    ("thứ 4", "wednesday"),
    ("thứ 5", "thursday"),
    ("thứ 6", "friday"),
    ("thứ 7", "saturday"),
    ("chủ nhật", "sunday"),
];

static REVERSE_LABELS: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    CATEGORY_LABELS
        .iter()
        .map(|(tag, label)| (label.to_lowercase(), *tag))
        .collect()
});

/// Maps a vendor display string to its canonical tag, case-insensitively.
pub fn canonical_tag(label: &str) -> Option<&'static str> {
    REVERSE_LABELS.get(&label.to_lowercase()).copied()
}

pub fn is_bookkeeping(tag: &str) -> bool {
    BOOKKEEPING_TAGS.contains(&tag)
}

/// First declared type whose tag set intersects `categories`, if any.
pub fn infer_type(categories: &[String]) -> Option<&'static str> {
    TYPE_RULES
        .iter()
        .find(|(_, tags)| categories.iter().any(|cat| tags.contains(&cat.as_str())))
        .map(|(name, _)| *name)
}

pub fn weekday_from_code(code: i64) -> Option<&'static str> {
    DAY_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, day)| *day)
}

pub fn weekday_from_vietnamese(token: &str) -> Option<&'static str> {
    DAY_NAMES_VI
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, day)| *day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(canonical_tag("Nhà hàng"), Some("restaurant"));
        assert_eq!(canonical_tag("nhà hàng"), Some("restaurant"));
        assert_eq!(canonical_tag("NHÀ HÀNG"), Some("restaurant"));
    }

    #[test]
    fn unknown_label_has_no_tag() {
        assert_eq!(canonical_tag("Tiệm sửa xe"), None);
    }

    #[test]
    fn bookkeeping_tags_are_flagged() {
        assert!(is_bookkeeping("service"));
        assert!(is_bookkeeping("placeholder"));
        assert!(is_bookkeeping("service_desc"));
        assert!(!is_bookkeeping("cafe"));
    }

    #[test]
    fn type_inference_first_declared_wins() {
        // Matches both "eatery" (restaurant) and "drink" (cafe); the earlier
        // rule decides.
        let categories = vec!["cafe".to_string(), "restaurant".to_string()];
        assert_eq!(infer_type(&categories), Some("eatery"));
    }

    #[test]
    fn type_inference_without_match_is_none() {
        let categories = vec!["wifi".to_string()];
        assert_eq!(infer_type(&categories), None);
        assert_eq!(infer_type(&[]), None);
    }

    #[test]
    fn day_codes_follow_vietnamese_convention() {
        assert_eq!(weekday_from_code(2), Some("monday"));
        assert_eq!(weekday_from_code(8), Some("sunday"));
        assert_eq!(weekday_from_code(1), None);
    }

    #[test]
    fn vietnamese_day_names_resolve() {
        assert_eq!(weekday_from_vietnamese("thứ 2"), Some("monday"));
        assert_eq!(weekday_from_vietnamese("chủ nhật"), Some("sunday"));
        assert_eq!(weekday_from_vietnamese("ngày mai"), None);
    }
}
