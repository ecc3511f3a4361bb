//! Rendering of catalog JSON documents into chat reply text.
//!
//! The catalog layer passes documents through verbatim, so these renderers read
//! fields defensively: a missing field degrades to a placeholder, never a panic.

use serde_json::Value;

const MAX_LIST_ITEMS: usize = 10;

fn title_of(item: &Value) -> &str {
    item.get("title")
        .or_else(|| item.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("Untitled")
}

fn year_of(item: &Value) -> &str {
    item.get("release_date")
        .or_else(|| item.get("first_air_date"))
        .and_then(Value::as_str)
        .map(|date| date.get(..4).unwrap_or(date))
        .filter(|year| !year.is_empty())
        .unwrap_or("????")
}

fn rating_of(item: &Value) -> String {
    match item.get("vote_average").and_then(Value::as_f64) {
        Some(score) if score > 0.0 => format!("{:.1}", score),
        _ => "n/a".to_string(),
    }
}

/// Numbered title list from a paginated document (`results` array).
/// Returns `None` when the document has no results to show.
pub fn render_title_list(heading: &str, doc: &Value) -> Option<String> {
    let results = doc.get("results")?.as_array()?;
    if results.is_empty() {
        return None;
    }

    let mut out = String::from(heading);
    out.push('\n');
    for (index, item) in results.iter().take(MAX_LIST_ITEMS).enumerate() {
        let id = item.get("id").and_then(Value::as_i64);
        out.push_str(&format!(
            "{}. {} ({}) \u{2b50} {}",
            index + 1,
            title_of(item),
            year_of(item),
            rating_of(item)
        ));
        if let Some(id) = id {
            out.push_str(&format!("  [id {}]", id));
        }
        out.push('\n');
    }
    Some(out.trim_end().to_string())
}

/// Genre listing from a `genres` array of `{id, name}` records.
/// Returns `None` when the document has no genres.
pub fn render_genre_list(heading: &str, doc: &Value) -> Option<String> {
    let genres = doc.get("genres")?.as_array()?;
    if genres.is_empty() {
        return None;
    }

    let mut out = String::from(heading);
    out.push('\n');
    for genre in genres {
        let id = genre.get("id").and_then(Value::as_i64).unwrap_or(0);
        let name = genre.get("name").and_then(Value::as_str).unwrap_or("?");
        out.push_str(&format!("{} \u{00b7} {}\n", id, name));
    }
    Some(out.trim_end().to_string())
}

/// Detail card for one movie record.
pub fn render_movie_details(doc: &Value) -> String {
    let mut out = format!(
        "\u{1f3ac} {} ({}) \u{2b50} {}",
        title_of(doc),
        year_of(doc),
        rating_of(doc)
    );
    if let Some(runtime) = doc.get("runtime").and_then(Value::as_i64).filter(|m| *m > 0) {
        out.push_str(&format!("\n{} min", runtime));
    }
    append_genres_line(&mut out, doc);
    append_overview(&mut out, doc);
    out
}

/// Detail card for one TV record.
pub fn render_tv_details(doc: &Value) -> String {
    let mut out = format!(
        "\u{1f4fa} {} ({}) \u{2b50} {}",
        title_of(doc),
        year_of(doc),
        rating_of(doc)
    );
    let seasons = doc.get("number_of_seasons").and_then(Value::as_i64);
    let episodes = doc.get("number_of_episodes").and_then(Value::as_i64);
    if let (Some(seasons), Some(episodes)) = (seasons, episodes) {
        out.push_str(&format!("\n{} seasons, {} episodes", seasons, episodes));
    }
    append_genres_line(&mut out, doc);
    append_overview(&mut out, doc);
    out
}

fn append_genres_line(out: &mut String, doc: &Value) {
    let names: Vec<&str> = doc
        .get("genres")
        .and_then(Value::as_array)
        .map(|genres| {
            genres
                .iter()
                .filter_map(|g| g.get("name").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default();
    if !names.is_empty() {
        out.push('\n');
        out.push_str(&names.join(", "));
    }
}

fn append_overview(out: &mut String, doc: &Value) {
    if let Some(overview) = doc
        .get("overview")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
    {
        out.push_str("\n\n");
        out.push_str(overview);
    }
}
