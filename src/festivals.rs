//! Static festival table keyed by (Bengali month, day).

/// A festival or holiday pinned to a Bengali calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FestivalEntry {
    /// Bengali month index, 0..=11
    pub month: u8,
    /// Bengali day of month
    pub day: u8,
    /// Festival label
    pub name: &'static str,
}

const fn entry(month: u8, day: u8, name: &'static str) -> FestivalEntry {
    FestivalEntry { month, day, name }
}

/// Bengali festivals and holidays. The list is illustrative, not
/// exhaustive; duplicate (month, day) pairs are allowed and all returned.
pub const BENGALI_FESTIVALS: [FestivalEntry; 23] = [
    entry(0, 1, "পহেলা বৈশাখ"),
    entry(0, 15, "রবীন্দ্রনাথ ঠাকুরের জন্মদিন"),
    entry(0, 25, "কাজী নজরুল ইসলামের জন্মদিন"),
    entry(1, 15, "বিশ্ব পরিবেশ দিবস"),
    entry(2, 1, "আষাঢ়ের প্রথম দিন"),
    entry(3, 15, "শ্রাবণ সংক্রান্তি"),
    entry(4, 1, "ভাদ্রের প্রথম দিন"),
    entry(5, 1, "আশ্বিনের প্রথম দিন"),
    entry(5, 15, "দুর্গা পূজা শুরু"),
    entry(5, 20, "দুর্গা পূজা"),
    entry(6, 1, "কার্তিকের প্রথম দিন"),
    entry(6, 15, "কালী পূজা"),
    entry(7, 1, "অগ্রহায়ণের প্রথম দিন"),
    entry(7, 15, "অগ্রহায়ণ সংক্রান্তি"),
    entry(8, 1, "পৌষের প্রথম দিন"),
    entry(8, 15, "পৌষ সংক্রান্তি"),
    entry(9, 1, "মাঘের প্রথম দিন"),
    entry(9, 15, "মাঘ সংক্রান্তি"),
    entry(10, 1, "ফাল্গুনের প্রথম দিন"),
    entry(10, 15, "ফাল্গুন সংক্রান্তি"),
    entry(11, 1, "চৈত্রের প্রথম দিন"),
    entry(11, 15, "চৈত্র সংক্রান্তি"),
    entry(11, 30, "চৈত্র সংক্রান্তি"),
];

/// Festival names for an exact (month, day) match, in table order.
/// Returns an empty vec (never an error) when nothing matches.
pub fn festivals_for(month: u8, day: u8) -> Vec<&'static str> {
    BENGALI_FESTIVALS
        .iter()
        .filter(|f| f.month == month && f.day == day)
        .map(|f| f.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pohela_boishakh_present() {
        let names = festivals_for(0, 1);
        assert!(!names.is_empty());
        assert_eq!(names[0], "পহেলা বৈশাখ");
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(festivals_for(5, 99).is_empty());
        assert!(festivals_for(3, 2).is_empty());
    }

    #[test]
    fn test_every_first_of_month_from_asharh() {
        // Months 2, 4..=11 all carry a first-day entry
        for month in [2u8, 4, 5, 6, 7, 8, 9, 10, 11] {
            assert!(
                !festivals_for(month, 1).is_empty(),
                "month {month} should have a first-day festival"
            );
        }
    }

    #[test]
    fn test_duplicates_all_returned() {
        // Choitro Sankranti appears at both (11, 15) and (11, 30)
        assert_eq!(festivals_for(11, 15), vec!["চৈত্র সংক্রান্তি"]);
        assert_eq!(festivals_for(11, 30), vec!["চৈত্র সংক্রান্তি"]);
    }

    #[test]
    fn test_table_order_preserved() {
        let names = festivals_for(5, 15);
        assert_eq!(names, vec!["দুর্গা পূজা শুরু"]);
    }

    #[test]
    fn test_entries_in_range() {
        for f in &BENGALI_FESTIVALS {
            assert!(f.month <= 11);
            assert!((1..=32).contains(&f.day));
            assert!(!f.name.is_empty());
        }
    }
}
