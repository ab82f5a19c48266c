use chrono::NaiveDate;

/// `YYYYMMDD`
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Next order ID for `today`: `ORD-{YYYYMMDD}-{NNN}`.
///
/// The sequence is one more than the number of logged rows whose ID contains
/// today's stamp anywhere in the text. Rows are counted, not orders, and an
/// ID that happens to contain the same eight digits elsewhere is counted too.
/// Nothing here stops two writers from computing the same ID.
pub fn generate_order_id<I, S>(existing_order_ids: I, today: NaiveDate) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stamp = date_stamp(today);
    let matches = existing_order_ids
        .into_iter()
        .filter(|id| id.as_ref().contains(&stamp))
        .count();

    format!("ORD-{}-{:03}", stamp, matches + 1)
}
