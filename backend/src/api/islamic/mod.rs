//! Islamic reference catalog: adhkar, the 99 names, Quran verses, prayer
//! times, the events calendar, Hijri dates and the Qibla bearing.

pub mod handlers;
pub mod routes;
