//! User-facing message constants. The product UI is Persian.

/// Shown when submit is pressed with no file selected.
pub const NO_FILE_SELECTED: &str = "لطفاً یک فایل CSV انتخاب کنید.";

/// Generic fallback when the upload request fails without a parseable detail.
pub const UPLOAD_FAILED: &str = "خطا در ارسال فایل";

/// Generic fallback when fetching daily recommendations fails.
pub const FETCH_FAILED: &str = "خطا در دریافت توصیه‌ها";

/// Informational notice for a successful response with an empty list.
pub const NO_RECOMMENDATIONS: &str = "هیچ توصیه‌ای برای امروز یافت نشد.";
