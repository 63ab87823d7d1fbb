//! Predict command: the rating form and its one action.

use crate::error::{CliError, Result};
use crate::output;
use colored::Colorize;
use sabor::features::{
    encode, has_many_deliveries, RestaurantInput, CUISINE_COUNT_DEFAULT, CUISINE_COUNT_MAX,
    CUISINE_COUNT_MIN, DELIVERY_COUNT_DEFAULT, DELIVERY_COUNT_MAX, DELIVERY_COUNT_MIN,
    PRICE_DEFAULT, PRICE_MAX, PRICE_MIN,
};
use sabor::model::ModelHandle;
use sabor::rating::{clamp_rating, Commentary, PriceCategory};
use sabor::tables::{Cuisine, Locality};
use std::io::{self, Write};

/// Resolved `predict` flags.
pub(crate) struct PredictArgs {
    pub price: u32,
    pub locality: Option<String>,
    pub cuisine: Option<String>,
    pub cuisine_count: u8,
    pub delivery_count: u32,
    pub north_indian: Option<bool>,
    pub chinese: Option<bool>,
    pub fast_food: Option<bool>,
    pub interactive: bool,
    pub details: bool,
}

pub(crate) fn run(model: &ModelHandle, args: PredictArgs) -> Result<()> {
    let input = if args.interactive {
        prompt_form()?
    } else {
        build_input(&args)?
    };

    let model = model
        .get()
        .map_err(|e| CliError::ModelLoadFailed(e.to_string()))?;

    let features = encode(&input);
    log::debug!("encoded features: {:?}", features.as_slice());
    let rating = clamp_rating(model.predict(&features));
    render(&input, rating, args.details);
    Ok(())
}

/// Builds the form input from flags, with flag suggestions taken from the
/// selected cuisine.
fn build_input(args: &PredictArgs) -> Result<RestaurantInput> {
    let locality = match &args.locality {
        Some(text) => Locality::parse(text).ok_or_else(|| {
            CliError::InvalidInput(format!(
                "unknown locality '{text}' (see `sabor localities`)"
            ))
        })?,
        None => Locality::ALL[0],
    };
    let cuisine = match &args.cuisine {
        Some(text) => Cuisine::parse(text).ok_or_else(|| {
            CliError::InvalidInput(format!("unknown cuisine '{text}' (see `sabor cuisines`)"))
        })?,
        None => Cuisine::ALL[0],
    };

    let suggested = RestaurantInput::for_cuisine(cuisine);
    Ok(RestaurantInput {
        price: args.price,
        locality,
        main_cuisine: cuisine,
        cuisine_count: args.cuisine_count,
        delivery_count: args.delivery_count,
        serves_north_indian: args.north_indian.unwrap_or(suggested.serves_north_indian),
        serves_chinese: args.chinese.unwrap_or(suggested.serves_chinese),
        is_fast_food: args.fast_food.unwrap_or(suggested.is_fast_food),
    })
}

fn render(input: &RestaurantInput, rating: f32, details: bool) {
    output::section("Predicted Rating");
    output::rating(rating);

    let tier = Commentary::for_rating(rating);
    output::commentary(tier.headline(), tier.message());

    if details {
        let category = PriceCategory::from_price(input.price);
        output::section("Prediction Details");
        output::kv(
            "Price Category",
            format!("{} (₹{})", category.label(), input.price),
        );
        output::kv("Location", input.locality);
        output::kv("Main Cuisine", input.main_cuisine);
        output::kv("Cuisines Offered", input.cuisine_count);
        output::kv("Delivery Orders", input.delivery_count);
        output::kv(
            "High Delivery Volume",
            if has_many_deliveries(input.delivery_count) {
                "Yes"
            } else {
                "No"
            },
        );
        output::kv("Locality Code", input.locality.code());
        output::kv("Cuisine Code", input.main_cuisine.code());
        output::kv("Price Category Code", category.code());
    }
}

// =============================================================================
// Interactive form
// =============================================================================

/// Fills the form with sequential prompts. Empty input (or EOF) keeps the
/// shown default; cuisine flag defaults are suggested once from the cuisine
/// answer and are not re-synced afterwards.
fn prompt_form() -> Result<RestaurantInput> {
    println!("{}", "Enter Restaurant Details".bold());

    let price = prompt_number(
        "Price for 2 people (₹)",
        u64::from(PRICE_MIN)..=u64::from(PRICE_MAX),
        u64::from(PRICE_DEFAULT),
    )? as u32;

    let locality = prompt_choice("Locality", &Locality::ALL, Locality::parse)?;
    let cuisine = prompt_choice("Main Cuisine", &Cuisine::ALL, Cuisine::parse)?;

    let cuisine_count = prompt_number(
        "Number of cuisines offered",
        u64::from(CUISINE_COUNT_MIN)..=u64::from(CUISINE_COUNT_MAX),
        u64::from(CUISINE_COUNT_DEFAULT),
    )? as u8;

    let delivery_count = prompt_number(
        "Delivery rating count",
        u64::from(DELIVERY_COUNT_MIN)..=u64::from(DELIVERY_COUNT_MAX),
        u64::from(DELIVERY_COUNT_DEFAULT),
    )? as u32;

    let suggested = RestaurantInput::for_cuisine(cuisine);
    let serves_north_indian =
        prompt_flag("Serves North Indian?", suggested.serves_north_indian)?;
    let serves_chinese = prompt_flag("Serves Chinese?", suggested.serves_chinese)?;
    let is_fast_food = prompt_flag("Is fast food?", suggested.is_fast_food)?;

    Ok(RestaurantInput {
        price,
        locality,
        main_cuisine: cuisine,
        cuisine_count,
        delivery_count,
        serves_north_indian,
        serves_chinese,
        is_fast_food,
    })
}

/// Reads one trimmed line; `None` on EOF.
fn read_answer(prompt: &str) -> Result<Option<String>> {
    print!("{} ", prompt.green().bold());
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_number(
    label: &str,
    range: std::ops::RangeInclusive<u64>,
    default: u64,
) -> Result<u64> {
    loop {
        let answer = match read_answer(&format!("{label} [{default}]:"))? {
            None => return Ok(default),
            Some(answer) if answer.is_empty() => return Ok(default),
            Some(answer) => answer,
        };
        match answer.parse::<u64>() {
            Ok(value) if range.contains(&value) => return Ok(value),
            _ => println!(
                "  enter a number between {} and {}",
                range.start(),
                range.end()
            ),
        }
    }
}

fn prompt_choice<T: Copy + std::fmt::Display>(
    label: &str,
    all: &[T],
    parse: fn(&str) -> Option<T>,
) -> Result<T> {
    println!("{label} options:");
    for (code, entry) in all.iter().enumerate() {
        println!("  {code:>2}  {entry}");
    }

    loop {
        let answer = match read_answer(&format!("{label} [0]:"))? {
            None => return Ok(all[0]),
            Some(answer) if answer.is_empty() => return Ok(all[0]),
            Some(answer) => answer,
        };
        match parse(&answer) {
            Some(choice) => return Ok(choice),
            None => println!("  enter a code or name from the list"),
        }
    }
}

fn prompt_flag(label: &str, default: bool) -> Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    loop {
        let answer = match read_answer(&format!("{label} {hint}:"))? {
            None => return Ok(default),
            Some(answer) if answer.is_empty() => return Ok(default),
            Some(answer) => answer.to_lowercase(),
        };
        match answer.as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("  enter y or n"),
        }
    }
}
