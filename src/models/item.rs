use serde::{Deserialize, Serialize};

/// One auction listing. `buyout_amount` is in copper; views convert it
/// to 金/银/铜 for display (utils::format).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Item {
    #[serde(rename = "itemID")]
    pub item_id: u32,
    pub name: String,
    pub quantity: u32,
    #[serde(rename = "buyoutAmount")]
    pub buyout_amount: u64,
}

/// GET /query response. `count == 0` with an empty `data` is a valid
/// answer, rendered as "item not found" rather than an error.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct QueryResponse {
    pub count: u32,
    pub data: Vec<Item>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query_payload() {
        let json = r#"{
            "count": 2,
            "data": [
                {"itemID": 12345, "name": "黑石板甲", "quantity": 1, "buyoutAmount": 123456},
                {"itemID": 12345, "name": "黑石板甲", "quantity": 1, "buyoutAmount": 98700}
            ]
        }"#;
        let resp: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.count, 2);
        assert_eq!(resp.data[0].item_id, 12345);
        assert_eq!(resp.data[1].buyout_amount, 98_700);
    }

    #[test]
    fn parses_empty_result() {
        let resp: QueryResponse = serde_json::from_str(r#"{"count":0,"data":[]}"#).unwrap();
        assert_eq!(resp.count, 0);
        assert!(resp.data.is_empty());
    }
}
