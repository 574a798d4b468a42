/// Number of questions returned per page on listing endpoints
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Quiz category id meaning "draw from every category"
pub const ALL_CATEGORIES: i32 = 0;
