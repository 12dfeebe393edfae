pub mod prompts;
pub mod render;

pub use prompts::{
    collect_request, fuzzy_meat_matches, prompt_budget, prompt_count, prompt_meats, prompt_menu,
    prompt_sides, prompt_yes_no,
};
pub use render::{
    display_breakdown, display_price_tables, render_plan, save_plan, write_shopping_csv,
};
