pub mod common;
pub mod person;
pub mod receipt;
pub mod result;
pub mod spec;

pub use common::{Identifiable, NamedEntity, PersonId};
pub use person::Person;
pub use receipt::{Item, ItemValue, Receipt, TransactionType};
pub use result::{CellValue, PivotResult, PivotRow};
pub use spec::{
    Column, GroupByField, Measure, MeasureField, MeasureOp, OwnerAllocation, PivotSpec, SortBy,
    SortDir, TimeGrain,
};
