//! Allow-list of recognised arbitral institutions.
//!
//! Matching is a case-sensitive substring test, so both full names and the
//! acronyms parties commonly write are listed.

pub const DEFAULT_INSTITUTIONS: &[&str] = &[
    "International Chamber of Commerce",
    "ICC",
    "London Court of International Arbitration",
    "LCIA",
    "Singapore International Arbitration Centre",
    "SIAC",
    "Hong Kong International Arbitration Centre",
    "HKIAC",
    "International Centre for Dispute Resolution",
    "ICDR",
    "American Arbitration Association",
    "AAA",
    "China International Economic and Trade Arbitration Commission",
    "CIETAC",
    "Stockholm Chamber of Commerce",
    "SCC",
    "International Centre for Settlement of Investment Disputes",
    "ICSID",
    "Permanent Court of Arbitration",
    "PCA",
    "JAMS",
    "Swiss Arbitration Centre",
    "Vienna International Arbitral Centre",
    "VIAC",
    "German Arbitration Institute",
    "Dubai International Arbitration Centre",
    "DIAC",
    "Japan Commercial Arbitration Association",
    "JCAA",
    "Korean Commercial Arbitration Board",
    "KCAB",
    "Asian International Arbitration Centre",
    "AIAC",
    "Cairo Regional Centre for International Commercial Arbitration",
    "CRCICA",
    "Australian Centre for International Commercial Arbitration",
    "ACICA",
    "Netherlands Arbitration Institute",
    "WIPO Arbitration and Mediation Center",
];
