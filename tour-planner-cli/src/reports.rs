use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use tour_planner::Itinerary;

use crate::util::format_money;

pub fn generate_console_report<W: Write + ?Sized>(
    writer: &mut W,
    itinerary: &Itinerary,
) -> Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "{}",
        "✈️  Your Custom Travel Itinerary".bright_cyan().bold()
    )?;
    writeln!(writer, "{}", "================================".cyan())?;
    writeln!(writer)?;

    for stop in &itinerary.stops {
        writeln!(writer, "📍 {}", stop.country.to_uppercase().bold())?;
        match stop.dates {
            Some(dates) => writeln!(
                writer,
                "   - Duration: {} days ({} - {})",
                stop.days,
                dates.arrive.format("%b %d"),
                dates.depart.format("%b %d")
            )?,
            None => writeln!(writer, "   - Duration: {}", "passing through".yellow())?,
        }
        writeln!(
            writer,
            "   - Est. Accommodation: {}",
            format_money(stop.accommodation_cost)
        )?;
        writeln!(
            writer,
            "   - Est. Travel Cost to here: {}",
            format_money(stop.travel_cost)
        )?;
        writeln!(writer, "   - Main Interests: {}", stop.interests.join(", "))?;
        writeln!(writer)?;
    }

    writeln!(writer, "🏠 Return to {}", itinerary.home.bold())?;
    if let Some(leg) = &itinerary.return_leg {
        writeln!(writer, "   - Est. Return Travel Cost: {}", format_money(leg.cost))?;
    }
    writeln!(writer)?;

    writeln!(writer, "{}", "🗺️  Route Summary".bright_yellow().bold())?;
    writeln!(writer, "{}", "-".repeat(30).yellow())?;
    writeln!(writer, "{}", itinerary.route.join(" → "))?;
    writeln!(writer)?;

    writeln!(writer, "{}", "💰 Financial Summary".bright_yellow().bold())?;
    writeln!(writer, "{}", "-".repeat(30).yellow())?;
    writeln!(
        writer,
        "Total Estimated Cost: {}",
        format_money(itinerary.total_cost)
    )?;
    writeln!(writer, "Your Budget: {}", format_money(itinerary.budget))?;
    writeln!(
        writer,
        "Remaining Budget: {}",
        format_money(itinerary.remaining_budget).green()
    )?;
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(
    writer: &mut W,
    itinerary: &Itinerary,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, itinerary)?;
    writeln!(writer)?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    writer: &mut W,
    itinerary: &Itinerary,
) -> Result<()> {
    writeln!(writer, "# Travel Itinerary\n")?;

    writeln!(writer, "## Stops\n")?;
    writeln!(writer, "| # | Country | Days | Dates | Travel | Accommodation |")?;
    writeln!(writer, "|---|---------|------|-------|--------|---------------|")?;
    for (idx, stop) in itinerary.stops.iter().enumerate() {
        let dates = stop.dates.map_or_else(
            || "-".to_string(),
            |d| format!("{} – {}", d.arrive, d.depart),
        );
        writeln!(
            writer,
            "| {} | {} | {} | {} | {} | {} |",
            idx + 1,
            stop.country,
            stop.days,
            dates,
            format_money(stop.travel_cost),
            format_money(stop.accommodation_cost)
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "## Route\n")?;
    writeln!(writer, "{}\n", itinerary.route.join(" → "))?;

    writeln!(writer, "## Summary\n")?;
    if let Some(leg) = &itinerary.return_leg {
        writeln!(
            writer,
            "- **Return from {}**: {}",
            leg.from,
            format_money(leg.cost)
        )?;
    }
    writeln!(
        writer,
        "- **Total estimated cost**: {}",
        format_money(itinerary.total_cost)
    )?;
    writeln!(writer, "- **Budget**: {}", format_money(itinerary.budget))?;
    writeln!(
        writer,
        "- **Remaining budget**: {}",
        format_money(itinerary.remaining_budget)
    )?;
    Ok(())
}
