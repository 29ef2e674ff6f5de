//! Fixed catalog of data sources.
//!
//! One entry per source series or remote query. The transform layer
//! iterates these catalogs; adding a series or changing a filter code is
//! an edit here, not a new pipeline.

use serde::Serialize;

use crate::period::Frequency;

/// SDMX-CSV labeled column holding the raw country/region code.
pub const REF_AREA: &str = "REF_AREA";

/// SDMX-CSV labeled column holding the raw period label.
pub const TIME_PERIOD: &str = "TIME_PERIOD";

/// SDMX-CSV labeled column holding the observation value.
pub const OBS_VALUE: &str = "OBS_VALUE";

/// SDMX-CSV labeled column holding the unit multiplier.
pub const UNIT_MULT: &str = "UNIT_MULT";

/// A local FX spot-rate series file (FRED export naming).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FxPairSpec {
    /// File name under the data directory.
    pub file: &'static str,
    /// Series code, also the value column header inside the file.
    pub series: &'static str,
    /// Canonical country code the pair is attributed to.
    pub country: &'static str,
    /// True when the file quotes USD per foreign unit and must be
    /// inverted to match the foreign-per-USD convention of the rest.
    pub invert: bool,
    /// Whether the pair enters the all-spots USD panel.
    pub in_usd_panel: bool,
}

const fn fx(
    file: &'static str,
    series: &'static str,
    country: &'static str,
    invert: bool,
    in_usd_panel: bool,
) -> FxPairSpec {
    FxPairSpec {
        file,
        series,
        country,
        invert,
        in_usd_panel,
    }
}

/// Spot-rate files, one per currency pair.
///
/// The EUR, GBP, AUD and NZD files arrive quoted as USD per unit and are
/// inverted on load; Venezuela is kept as a series but excluded from the
/// all-spots panel (its coverage window would empty the inner alignment).
pub const FX_PAIRS: &[FxPairSpec] = &[
    fx("DEXUSEU.csv", "DEXUSEU", "I9", true, true),
    fx("DEXJPUS.csv", "DEXJPUS", "JP", false, true),
    fx("DEXCHUS.csv", "DEXCHUS", "CN", false, true),
    fx("DEXCAUS.csv", "DEXCAUS", "CA", false, true),
    fx("DEXKOUS.csv", "DEXKOUS", "KR", false, true),
    fx("DEXMXUS.csv", "DEXMXUS", "MX", false, true),
    fx("DEXUSUK.csv", "DEXUSUK", "GB", true, true),
    fx("DEXBZUS.csv", "DEXBZUS", "BR", false, true),
    fx("DEXDNUS.csv", "DEXDNUS", "DK", false, true),
    fx("DEXHKUS.csv", "DEXHKUS", "HK", false, true),
    fx("DEXINUS.csv", "DEXINUS", "IN", false, true),
    fx("DEXMAUS.csv", "DEXMAUS", "MY", false, true),
    fx("DEXNOUS.csv", "DEXNOUS", "NO", false, true),
    fx("DEXSDUS.csv", "DEXSDUS", "SE", false, true),
    fx("DEXSFUS.csv", "DEXSFUS", "CH", false, true),
    fx("DEXSIUS.csv", "DEXSIUS", "SG", false, true),
    fx("DEXSLUS.csv", "DEXSLUS", "LK", false, true),
    fx("DEXSZUS.csv", "DEXSZUS", "ZA", false, true),
    fx("DEXTAUS.csv", "DEXTAUS", "TW", false, true),
    fx("DEXTHUS.csv", "DEXTHUS", "TH", false, true),
    fx("DEXUSAL.csv", "DEXUSAL", "AU", true, true),
    fx("DEXUSNZ.csv", "DEXUSNZ", "NZ", true, true),
    fx("DEXVZUS.csv", "DEXVZUS", "VE", false, false),
];

/// A trade-weighted USD index series file.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UsdIndexSpec {
    pub file: &'static str,
    pub series: &'static str,
    /// Column label in the combined index table.
    pub label: &'static str,
}

/// Advanced and emerging-economy USD index files.
pub const USD_INDEXES: &[UsdIndexSpec] = &[
    UsdIndexSpec {
        file: "DTWEXAFEGS.csv",
        series: "DTWEXAFEGS",
        label: "Advanced",
    },
    UsdIndexSpec {
        file: "DTWEXEMEGS.csv",
        series: "DTWEXEMEGS",
        label: "Emerging",
    },
];

/// A local long-term sovereign yield series file.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct YieldSpec {
    pub file: &'static str,
    pub series: &'static str,
    pub country: &'static str,
}

const fn yld(file: &'static str, series: &'static str, country: &'static str) -> YieldSpec {
    YieldSpec {
        file,
        series,
        country,
    }
}

/// Long-term government bond yields, monthly, percent per annum.
pub const YIELD_SERIES: &[YieldSpec] = &[
    yld("IRLTLT01USM156N.csv", "IRLTLT01USM156N", "US"),
    yld("IRLTLT01JPM156N.csv", "IRLTLT01JPM156N", "JP"),
    yld("IRLTLT01GBM156N.csv", "IRLTLT01GBM156N", "GB"),
    yld("IRLTLT01DEM156N.csv", "IRLTLT01DEM156N", "DE"),
    yld("IRLTLT01CAM156N.csv", "IRLTLT01CAM156N", "CA"),
    yld("IRLTLT01AUM156N.csv", "IRLTLT01AUM156N", "AU"),
    yld("IRLTLT01KRM156N.csv", "IRLTLT01KRM156N", "KR"),
    yld("IRLTLT01CHM156N.csv", "IRLTLT01CHM156N", "CH"),
    yld("IRLTLT01SEM156N.csv", "IRLTLT01SEM156N", "SE"),
    yld("IRLTLT01NOM156N.csv", "IRLTLT01NOM156N", "NO"),
    yld("IRLTLT01MXM156N.csv", "IRLTLT01MXM156N", "MX"),
    yld("IRLTLT01ZAM156N.csv", "IRLTLT01ZAM156N", "ZA"),
    yld("IRLTLT01INM156N.csv", "IRLTLT01INM156N", "IN"),
];

/// Reference country subtracted to form yield spreads.
pub const YIELD_REFERENCE: &str = crate::country::UNITED_STATES;

/// File name of the raw local trade-flow table.
pub const TRADE_FLOWS_FILE: &str = "trade_flows.csv";

/// A parameterized SDMX REST query.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SdmxSourceSpec {
    /// Short name used in logs and the coverage report.
    pub name: &'static str,
    /// Agency REST endpoint base, without a trailing slash.
    pub base_url: &'static str,
    /// Dataflow reference (`AGENCY,FLOW,VERSION`).
    pub flow: &'static str,
    /// Dimension key, with the frequency already in its slot.
    pub key: &'static str,
    /// Native frequency of the observations.
    pub freq: Frequency,
    /// Categorical predicates applied to the labeled response columns.
    pub filters: &'static [(&'static str, &'static str)],
}

/// Quarterly GDP by expenditure, national currency.
pub const GDP_EXPENDITURE: SdmxSourceSpec = SdmxSourceSpec {
    name: "gdp-expenditure",
    base_url: "https://sdmx.oecd.org/public/rest/data",
    flow: "OECD.SDD.NAD,DSD_NAMAIN1@DF_QNA_EXPENDITURE_NATIO_CURR,1.1",
    key: "Q..........",
    freq: Frequency::Quarterly,
    filters: &[
        ("SECTOR", "S1"),
        ("TRANSACTION", "B1GQ"),
        ("PRICE_BASE", "LR"),
        ("UNIT_MEASURE", "XDC"),
    ],
};

/// Monthly all-items consumer price indexes.
pub const CONSUMER_PRICES: SdmxSourceSpec = SdmxSourceSpec {
    name: "consumer-prices",
    base_url: "https://sdmx.oecd.org/public/rest/data",
    flow: "OECD.SDD.TPS,DSD_PRICES@DF_PRICES_ALL,1.0",
    key: "M........",
    freq: Frequency::Monthly,
    filters: &[("TRANSACTION", "CPI"), ("UNIT_MEASURE", "IX")],
};

/// Annual trade in services, USD.
pub const TRADE_IN_SERVICES: SdmxSourceSpec = SdmxSourceSpec {
    name: "trade-in-services",
    base_url: "https://api.imf.org/external/sdmx/2.1/data",
    flow: "IMF.STA,DSD_BOP@DF_BOP_SERVICES,1.0",
    key: "A...",
    freq: Frequency::Annual,
    filters: &[("UNIT_MEASURE", "USD")],
};

/// The remote queries the pipeline issues, in fetch order.
pub const SDMX_SOURCES: &[SdmxSourceSpec] = &[GDP_EXPENDITURE, CONSUMER_PRICES, TRADE_IN_SERVICES];
