use tour_planner::InterestSet;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Interest tags are matched case-insensitively against the lowercase dataset tags.
pub fn parse_interests(s: &str) -> InterestSet {
    split_csv(s)
        .into_iter()
        .map(|tag| tag.to_lowercase())
        .collect()
}

/// Format an amount as `$1,234.50`.
pub fn format_money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}${grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_drops_empties() {
        assert_eq!(split_csv(" food, ,art ,"), vec!["food", "art"]);
        assert!(split_csv("").is_empty());
    }

    #[test]
    fn interests_are_lowercased_and_deduplicated() {
        let parsed = parse_interests("Food,ART,food");
        assert_eq!(
            parsed.into_iter().collect::<Vec<_>>(),
            vec!["art".to_string(), "food".to_string()]
        );
    }

    #[test]
    fn money_groups_thousands() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(999.5), "$999.50");
        assert_eq!(format_money(1_234.567), "$1,234.57");
        assert_eq!(format_money(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_money(-2_500.0), "-$2,500.00");
    }
}
