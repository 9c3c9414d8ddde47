//! Conversion from driver rows into [`Record`]s

use crate::error::{Error, Result};
use crate::row::Record;
use mysql_async::Row as MySqlAsyncRow;

use super::types::from_mysql_value;

/// Convert a mysql_async row into a [`Record`], keeping select order.
pub(crate) fn record_from_mysql_row(row: MySqlAsyncRow) -> Result<Record> {
    let columns = row.columns_ref();
    let mut record = Record::new();

    for (i, column) in columns.iter().enumerate() {
        let column_name = column.name_str().to_string();
        let mysql_value = row
            .as_ref(i)
            .ok_or_else(|| Error::ColumnNotFound(column_name.clone()))?
            .clone();
        record.push(column_name, from_mysql_value(mysql_value)?);
    }

    Ok(record)
}
