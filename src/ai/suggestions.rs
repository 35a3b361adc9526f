//! Contextual hospitality suggestions.
//!
//! A candidate pool is assembled from fixed tables keyed by the context
//! buckets plus a constant general pool, then one entry is drawn uniformly
//! at random. A string appearing in several tables stays duplicated in the
//! pool; the duplication is intentional weighting by relevance. The random
//! source is passed in so callers (and tests) control determinism.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Lunch,
    Dinner,
    Late,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartySize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerType {
    Family,
    Couple,
    Individual,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderValue {
    Low,
    Medium,
    High,
}

/// Already-bucketed order context. Bucketing a real order is the caller's
/// concern; the engine only consumes the result. `party_size` is carried
/// for callers but no candidate table is keyed by it.
#[derive(Debug, Clone)]
pub struct SuggestionContext {
    pub time_of_day: TimeOfDay,
    pub party_size: PartySize,
    pub customer_type: CustomerType,
    pub order_value: OrderValue,
    pub wait_minutes: u32,
}

const GENERAL_SUGGESTIONS: [&str; 10] = [
    "Suggest today's dessert special - popular with families",
    "Check if drinks are needed - been 10 minutes since last order",
    "Offer appetizer recommendations - kitchen has fresh ingredients",
    "Ask about spice preference - customer seems to enjoy milder flavors",
    "Suggest pairing beverages - perfect match for their main course",
    "Recommend sharing plates - great for groups",
    "Inquire about dietary restrictions - better safe than sorry",
    "Offer chef's special - limited time seasonal dish",
    "Check on meal satisfaction - ensure quality experience",
    "Suggest takeaway for remaining food - reduce waste",
];

const LUNCH_SUGGESTIONS: [&str; 3] = [
    "Suggest quick lunch combos",
    "Offer healthy salad options",
    "Recommend light beverages",
];

const DINNER_SUGGESTIONS: [&str; 3] = [
    "Suggest premium dishes",
    "Offer wine pairing",
    "Recommend dessert specials",
];

const LATE_SUGGESTIONS: [&str; 3] = [
    "Offer light snacks",
    "Suggest herbal teas",
    "Quick service items available",
];

const LONG_WAIT_SUGGESTIONS: [&str; 2] = [
    "Apologize for wait time and offer complimentary appetizer",
    "Check if customer needs anything while waiting",
];

const QUICK_SERVICE_SUGGESTION: &str = "Compliment on quick service and ask for feedback";

const FAMILY_SUGGESTIONS: [&str; 3] = [
    "Offer kid-friendly options or modifications",
    "Suggest sharing platters for the table",
    "Ask if high chairs or special seating needed",
];

const COUPLE_SUGGESTIONS: [&str; 3] = [
    "Suggest romantic ambiance adjustments",
    "Offer wine or beverage pairing",
    "Recommend dessert for sharing",
];

const GROUP_SUGGESTIONS: [&str; 3] = [
    "Suggest group meal deals or combos",
    "Offer separate billing options",
    "Recommend popular sharing dishes",
];

const HIGH_VALUE_SUGGESTIONS: [&str; 3] = [
    "Thank for choosing premium options",
    "Offer chef's special recommendations",
    "Suggest wine pairing for premium dishes",
];

const LOW_VALUE_SUGGESTIONS: [&str; 3] = [
    "Suggest value meal additions",
    "Offer combo deals to enhance value",
    "Mention daily specials and promotions",
];

/// The full candidate pool for a context. Exposed so tests can assert
/// membership; the pool always contains at least the general suggestions.
pub fn candidate_pool(context: &SuggestionContext) -> Vec<&'static str> {
    let mut pool: Vec<&'static str> = Vec::new();

    pool.extend(match context.time_of_day {
        TimeOfDay::Lunch => LUNCH_SUGGESTIONS,
        TimeOfDay::Dinner => DINNER_SUGGESTIONS,
        TimeOfDay::Late => LATE_SUGGESTIONS,
    });

    if context.wait_minutes > 15 {
        pool.extend(LONG_WAIT_SUGGESTIONS);
    } else if context.wait_minutes < 5 {
        pool.push(QUICK_SERVICE_SUGGESTION);
    }

    match context.customer_type {
        CustomerType::Family => pool.extend(FAMILY_SUGGESTIONS),
        CustomerType::Couple => pool.extend(COUPLE_SUGGESTIONS),
        CustomerType::Group => pool.extend(GROUP_SUGGESTIONS),
        CustomerType::Individual => {}
    }

    match context.order_value {
        OrderValue::High => pool.extend(HIGH_VALUE_SUGGESTIONS),
        OrderValue::Low => pool.extend(LOW_VALUE_SUGGESTIONS),
        OrderValue::Medium => {}
    }

    pool.extend(GENERAL_SUGGESTIONS);
    pool
}

/// Draw one suggestion uniformly from the combined pool. Non-deterministic
/// by design when given a live rng; never cache the result per request.
pub fn suggest_action<R: Rng + ?Sized>(context: &SuggestionContext, rng: &mut R) -> String {
    let pool = candidate_pool(context);
    pool[rng.gen_range(0..pool.len())].to_string()
}
