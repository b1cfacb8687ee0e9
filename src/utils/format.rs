/// Render a buyout price stored in copper as 金/银/铜.
/// 1 gold = 100 silver = 10 000 copper.
pub fn format_buyout(copper: u64) -> String {
    let gold = copper / 10_000;
    let silver = (copper % 10_000) / 100;
    let copper = copper % 100;
    format!("{}金{}银{}铜", gold, silver, copper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_copper() {
        assert_eq!(format_buyout(0), "0金0银0铜");
    }

    #[test]
    fn splits_into_denominations() {
        assert_eq!(format_buyout(123_456), "12金34银56铜");
        assert_eq!(format_buyout(9_999), "0金99银99铜");
        assert_eq!(format_buyout(10_000), "1金0银0铜");
    }

    #[test]
    fn copper_only() {
        assert_eq!(format_buyout(57), "0金0银57铜");
    }
}
