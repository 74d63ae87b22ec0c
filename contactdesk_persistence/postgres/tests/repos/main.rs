use contactdesk_models::pagination::{PaginationLimit, PaginationSlice};

#[path = "../common/mod.rs"]
mod common;

mod contact;

pub fn make_slice(limit: u64, offset: u64) -> PaginationSlice {
    PaginationSlice {
        limit: PaginationLimit::new(limit.try_into().unwrap()),
        offset,
    }
}

pub fn sliced<T>(data: &[T], slice: PaginationSlice) -> &[T] {
    let PaginationSlice { limit, offset } = slice;
    let limit = *limit as usize;
    let offset = offset as usize;

    &data[offset.min(data.len())..(offset + limit).min(data.len())]
}
