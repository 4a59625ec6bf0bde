/// Offset between a Gregorian year and the Bengali year that starts in it
pub const BENGALI_YEAR_OFFSET: i32 = 593;

/// Gregorian month of Pohela Boishakh (Bengali New Year) under the fixed rule
pub const NEW_YEAR_MONTH: u8 = 4;
/// Gregorian day of Pohela Boishakh under the fixed rule
pub const NEW_YEAR_DAY: u8 = 14;

/// Number of Bengali months
pub const MONTHS_PER_YEAR: u8 = 12;

/// Hard upper bound for a Bengali day-of-month (Choitro may reach 32)
pub const MAX_BENGALI_DAY: u8 = 32;

/// Month length assumed when a mapping entry cannot be resolved
pub const DEFAULT_MONTH_DAYS: u8 = 30;

/// Index of Choitro, the final Bengali month
pub const CHOITRO: u8 = 11;
/// Days in Choitro when the Bengali year is a leap year
pub const CHOITRO_DAYS_LEAP: u8 = 32;

/// Fixed Bengali month lengths (Choitro adjusted by `is_bengali_leap_year`)
pub const FIXED_MONTH_LENGTHS: [u8; 12] = [
    31, // Boishakh
    31, // Joishtho
    31, // Asharh
    31, // Srabon
    31, // Bhadro
    30, // Ashwin
    30, // Kartik
    30, // Ogrohayon
    30, // Poush
    30, // Magh
    30, // Falgun
    30, // Choitro (non-leap, adjusted by is_bengali_leap_year check)
];

/// Bengali month names, indexed by month 0..=11
pub const BENGALI_MONTHS: [&str; 12] = [
    "বৈশাখ",     // Boishakh
    "জ্যৈষ্ঠ",    // Joishtho
    "আষাঢ়",      // Asharh
    "শ্রাবণ",     // Srabon
    "ভাদ্র",      // Bhadro
    "আশ্বিন",     // Ashwin
    "কার্তিক",    // Kartik
    "অগ্রহায়ণ",   // Ogrohayon
    "পৌষ",       // Poush
    "মাঘ",       // Magh
    "ফাল্গুন",     // Falgun
    "চৈত্র",      // Choitro
];

/// Bengali weekday names, indexed by weekday 0 (Sunday) ..= 6 (Saturday)
pub const BENGALI_DAYS: [&str; 7] = [
    "রবিবার",
    "সোমবার",
    "মঙ্গলবার",
    "বুধবার",
    "বৃহস্পতিবার",
    "শুক্রবার",
    "শনিবার",
];

/// Bengali numeral glyphs for the digits 0-9 (U+09E6..=U+09EF)
pub const BENGALI_NUMERALS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Weeks shown in a month grid
pub const MATRIX_WEEKS: usize = 6;
/// Days per week in a month grid
pub const DAYS_PER_WEEK: usize = 7;
/// Total cells in a month grid (6 weeks of 7, starting Sunday)
pub const MATRIX_CELLS: usize = MATRIX_WEEKS * DAYS_PER_WEEK;

/// Gregorian month lengths (index 0 unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_MONTH_LENGTHS: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// February number in the Gregorian calendar
pub(crate) const FEBRUARY: u8 = 2;
/// Days in February for leap years
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator for "YYYY-MM-DD" mapping entries
pub const DATE_SEPARATOR: char = '-';
