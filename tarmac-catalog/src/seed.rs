use crate::catalog::FlightCatalog;
use crate::error::CatalogError;
use crate::flight::Flight;

/// The demo schedule of the Seve Ballesteros airport in Santander:
/// (code, company, departure date, departure time, arrival date,
/// arrival time, base price).
const SAMPLE_SCHEDULE: &[(&str, &str, &str, &str, &str, &str, &str)] = &[
    ("IBE0001", "Iberia", "2025-08-15", "10:30", "2025-08-15", "12:45", "120.50"),
    ("RYN0002", "Ryanair", "2025-08-15", "11:00", "2025-08-15", "13:00", "75.00"),
    ("VUE0003", "Vueling", "2025-08-16", "09:15", "2025-08-16", "11:00", "99.99"),
    ("AIR1122", "Air Europa", "2025-10-01", "14:00", "2025-10-01", "16:30", "210.00"),
    ("LUF5566", "Lufthansa", "2025-10-10", "12:00", "2025-10-10", "14:30", "255.00"),
    ("RYN9900", "Ryanair", "2025-11-10", "06:15", "2025-11-10", "08:20", "49.50"),
    ("IBE3030", "Iberia", "2025-11-15", "23:00", "2025-11-16", "01:15", "150.00"),
    ("VUE2025", "Vueling", "2025-11-20", "13:00", "2025-11-20", "15:10", "115.25"),
    ("RYN1111", "Ryanair", "2025-12-15", "07:00", "2025-12-15", "09:15", "68.80"),
    ("VUE8888", "Vueling", "2025-12-22", "09:00", "2025-12-22", "11:00", "145.00"),
    ("IBE4010", "Iberia", "2026-01-05", "16:00", "2026-01-05", "18:25", "160.00"),
    ("KLM1234", "KLM", "2026-02-10", "12:15", "2026-02-10", "15:00", "240.75"),
    ("EAS4455", "EasyJet", "2026-02-10", "13:30", "2026-02-10", "15:00", "89.90"),
    ("IBE9876", "Iberia", "2026-03-01", "11:00", "2026-03-01", "13:15", "185.00"),
    ("AIR1234", "Air France", "2026-06-01", "16:00", "2026-06-01", "18:25", "210.00"),
    ("TAP3344", "TAP Air Portugal", "2026-06-15", "19:00", "2026-06-15", "21:00", "140.00"),
    ("RYN4433", "Ryanair", "2026-09-05", "07:10", "2026-09-05", "09:15", "45.50"),
    ("VUE3322", "Vueling", "2026-08-01", "12:30", "2026-08-01", "14:30", "110.00"),
    ("AME9010", "American Airlines", "2027-07-20", "22:00", "2027-07-21", "08:20", "850.75"),
];

impl FlightCatalog {
    /// A catalog pre-loaded with the sample schedule. The data is static and
    /// known-valid, so the only way this fails is a regression in the
    /// validation rules themselves.
    pub fn with_sample_schedule() -> Result<Self, CatalogError> {
        let mut catalog = Self::new("Seve Ballesteros", "Santander");
        for (code, company, dep_date, dep_time, arr_date, arr_time, price) in SAMPLE_SCHEDULE {
            let flight =
                Flight::from_fields(code, company, dep_date, dep_time, arr_date, arr_time, price)?;
            catalog.add(flight)?;
        }
        Ok(catalog)
    }
}
