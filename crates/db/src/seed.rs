//! Seed data for the hotel's room category catalog.

use chrono::Utc;
use sqlx::SqlitePool;

/// `(code, name, description)` for every category the hotel sells.
pub const ROOM_CATEGORIES: &[(&str, &str, &str)] = &[
    ("XJG", "Suite Junior Garden", "Family room with a park view"),
    ("DTG", "Deluxe Twin Garden", "Double room with two separate beds and a park view"),
    ("DKG", "Deluxe King Garden", "Double room with one king bed and a park view"),
    ("CDG", "Connecting Deluxe Garden", "Connecting deluxe rooms with a park view"),
    ("DKS", "Deluxe King Sea", "Double room with one king bed and a sea view"),
    ("XJS", "Suite Junior Sea", "Family room with a sea view"),
    ("DTS", "Deluxe Twin Sea", "Double room with two separate beds and a sea view"),
    ("CDS", "Connecting Deluxe Sea", "Connecting deluxe rooms with a sea view"),
    ("HCR", "Handicapped Room", "Room with two separate beds adapted for guests with disabilities"),
    ("SEG", "Suite Elegant Garden", "Family suite with a mountain view"),
    ("DCKG", "Deluxe Comfort King Garden", "Double room with one bed and a park view"),
    ("DCTG", "Deluxe Comfort Twin Garden", "Double room with two separate beds and a park view"),
    ("DSKG", "Deluxe Sharm King Garden", "Double room with one bed and a park view"),
    ("DSSK", "Deluxe Sharm King Sea", "Double room with one bed and a sea view"),
    ("DCKS", "Deluxe Comfort King Sea", "Double room with one bed and a sea view"),
    ("SES", "Suite Elegant Sea", "Family suite with a sea view"),
    ("DCTS", "Deluxe Comfort Twin Sea", "Double room with two beds and a sea view"),
    ("DPK", "Deluxe Premier King", "Double room with one bed and no television"),
    ("DSPKG", "Deluxe Sharm Prime King Garden", "Double room with one bed and a park view"),
    ("DSPKS", "Deluxe Sharm Prime King Sea", "Double room with one bed and a park view"),
    ("XRS", "Suite Royal Sea", "Royal suite with two bedrooms, a living room and a sea view"),
    ("VEG", "Villa Executive Garden", "Family villa with a park view"),
    ("FWVHC", "Family Wine Villa Handicapped", "Family wine villa adapted for guests with disabilities"),
    ("FWV", "Family Wine Villa", "Family wine villa"),
    ("VPS", "Villa Presidential Sea", "Presidential villa with a sea view"),
    ("VIG", "Villa Imperial Garden", "Imperial villa with a park view"),
    ("PWV", "Presidential Wine Villa", "Presidential wine villa"),
    ("SMS", "SPA Medical Suite", "Spa apartments in the medical wing"),
    ("JSG", "Japanese Suite Garden", "Japanese suite with a park view"),
    ("SRSH", "Penthouse", "Royal suite with two bedrooms, a living room and a sea view on the 6th floor"),
];

/// Insert every catalog category whose code is not present yet.
///
/// Returns the number of rows inserted; running it twice inserts nothing the
/// second time.
pub async fn seed_room_categories(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for &(code, name, description) in ROOM_CATEGORIES {
        let result = sqlx::query(
            "INSERT INTO room_categories (code, name, description, created_at) \
             VALUES (?1, ?2, ?3, ?4) \
             ON CONFLICT (code) DO NOTHING",
        )
        .bind(code)
        .bind(name)
        .bind(description)
        .bind(now)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    tracing::info!(inserted, "Seeded room categories");
    Ok(inserted)
}
