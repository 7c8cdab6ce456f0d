//! ISO 4217 currency table.
//!
//! Columns: alphabetic code, numeric code, minor-unit exponent, name.
//! Units without a minor unit (metals, SDR, bond market units, `XXX`) carry
//! `None`.

use super::types::Currency;

pub(super) static CURRENCIES: &[Currency] = &[
    Currency::catalog("AED", 784, Some(2), "UAE Dirham"),
    Currency::catalog("AFN", 971, Some(2), "Afghani"),
    Currency::catalog("ALL", 8, Some(2), "Lek"),
    Currency::catalog("AMD", 51, Some(2), "Armenian Dram"),
    Currency::catalog("ANG", 532, Some(2), "Netherlands Antillean Guilder"),
    Currency::catalog("AOA", 973, Some(2), "Kwanza"),
    Currency::catalog("ARS", 32, Some(2), "Argentine Peso"),
    Currency::catalog("AUD", 36, Some(2), "Australian Dollar"),
    Currency::catalog("AWG", 533, Some(2), "Aruban Florin"),
    Currency::catalog("AZN", 944, Some(2), "Azerbaijan Manat"),
    Currency::catalog("BAM", 977, Some(2), "Convertible Mark"),
    Currency::catalog("BBD", 52, Some(2), "Barbados Dollar"),
    Currency::catalog("BDT", 50, Some(2), "Taka"),
    Currency::catalog("BGN", 975, Some(2), "Bulgarian Lev"),
    Currency::catalog("BHD", 48, Some(3), "Bahraini Dinar"),
    Currency::catalog("BIF", 108, Some(0), "Burundi Franc"),
    Currency::catalog("BMD", 60, Some(2), "Bermudian Dollar"),
    Currency::catalog("BND", 96, Some(2), "Brunei Dollar"),
    Currency::catalog("BOB", 68, Some(2), "Boliviano"),
    Currency::catalog("BOV", 984, Some(2), "Mvdol"),
    Currency::catalog("BRL", 986, Some(2), "Brazilian Real"),
    Currency::catalog("BSD", 44, Some(2), "Bahamian Dollar"),
    Currency::catalog("BTN", 64, Some(2), "Ngultrum"),
    Currency::catalog("BWP", 72, Some(2), "Pula"),
    Currency::catalog("BYN", 933, Some(2), "Belarusian Ruble"),
    Currency::catalog("BZD", 84, Some(2), "Belize Dollar"),
    Currency::catalog("C2", 156, Some(2), "Yuan Renminbi (non-domestic)"),
    Currency::catalog("CAD", 124, Some(2), "Canadian Dollar"),
    Currency::catalog("CDF", 976, Some(2), "Congolese Franc"),
    Currency::catalog("CHE", 947, Some(2), "WIR Euro"),
    Currency::catalog("CHF", 756, Some(2), "Swiss Franc"),
    Currency::catalog("CHW", 948, Some(2), "WIR Franc"),
    Currency::catalog("CLF", 990, Some(4), "Unidad de Fomento"),
    Currency::catalog("CLP", 152, Some(0), "Chilean Peso"),
    Currency::catalog("CNY", 156, Some(2), "Yuan Renminbi"),
    Currency::catalog("COP", 170, Some(2), "Colombian Peso"),
    Currency::catalog("COU", 970, Some(2), "Unidad de Valor Real"),
    Currency::catalog("CRC", 188, Some(2), "Costa Rican Colon"),
    Currency::catalog("CUC", 931, Some(2), "Peso Convertible"),
    Currency::catalog("CUP", 192, Some(2), "Cuban Peso"),
    Currency::catalog("CVE", 132, Some(2), "Cabo Verde Escudo"),
    Currency::catalog("CZK", 203, Some(2), "Czech Koruna"),
    Currency::catalog("DJF", 262, Some(0), "Djibouti Franc"),
    Currency::catalog("DKK", 208, Some(2), "Danish Krone"),
    Currency::catalog("DOP", 214, Some(2), "Dominican Peso"),
    Currency::catalog("DZD", 12, Some(2), "Algerian Dinar"),
    Currency::catalog("EGP", 818, Some(2), "Egyptian Pound"),
    Currency::catalog("ERN", 232, Some(2), "Nakfa"),
    Currency::catalog("ETB", 230, Some(2), "Ethiopian Birr"),
    Currency::catalog("EUR", 978, Some(2), "Euro"),
    Currency::catalog("FJD", 242, Some(2), "Fiji Dollar"),
    Currency::catalog("FKP", 238, Some(2), "Falkland Islands Pound"),
    Currency::catalog("GBP", 826, Some(2), "Pound Sterling"),
    Currency::catalog("GEL", 981, Some(2), "Lari"),
    Currency::catalog("GHS", 936, Some(2), "Ghana Cedi"),
    Currency::catalog("GIP", 292, Some(2), "Gibraltar Pound"),
    Currency::catalog("GMD", 270, Some(2), "Dalasi"),
    Currency::catalog("GNF", 324, Some(0), "Guinean Franc"),
    Currency::catalog("GTQ", 320, Some(2), "Quetzal"),
    Currency::catalog("GYD", 328, Some(2), "Guyana Dollar"),
    Currency::catalog("HKD", 344, Some(2), "Hong Kong Dollar"),
    Currency::catalog("HNL", 340, Some(2), "Lempira"),
    Currency::catalog("HRK", 191, Some(2), "Kuna"),
    Currency::catalog("HTG", 332, Some(2), "Gourde"),
    Currency::catalog("HUF", 348, Some(2), "Forint"),
    Currency::catalog("IDR", 360, Some(2), "Rupiah"),
    Currency::catalog("ILS", 376, Some(2), "New Israeli Sheqel"),
    Currency::catalog("INR", 356, Some(2), "Indian Rupee"),
    Currency::catalog("IQD", 368, Some(3), "Iraqi Dinar"),
    Currency::catalog("IRR", 364, Some(2), "Iranian Rial"),
    Currency::catalog("ISK", 352, Some(0), "Iceland Krona"),
    Currency::catalog("JMD", 388, Some(2), "Jamaican Dollar"),
    Currency::catalog("JOD", 400, Some(3), "Jordanian Dinar"),
    Currency::catalog("JPY", 392, Some(0), "Yen"),
    Currency::catalog("KES", 404, Some(2), "Kenyan Shilling"),
    Currency::catalog("KGS", 417, Some(2), "Som"),
    Currency::catalog("KHR", 116, Some(2), "Riel"),
    Currency::catalog("KMF", 174, Some(0), "Comorian Franc"),
    Currency::catalog("KPW", 408, Some(2), "North Korean Won"),
    Currency::catalog("KRW", 410, Some(0), "Won"),
    Currency::catalog("KWD", 414, Some(3), "Kuwaiti Dinar"),
    Currency::catalog("KYD", 136, Some(2), "Cayman Islands Dollar"),
    Currency::catalog("KZT", 398, Some(2), "Tenge"),
    Currency::catalog("LAK", 418, Some(2), "Lao Kip"),
    Currency::catalog("LBP", 422, Some(2), "Lebanese Pound"),
    Currency::catalog("LKR", 144, Some(2), "Sri Lanka Rupee"),
    Currency::catalog("LRD", 430, Some(2), "Liberian Dollar"),
    Currency::catalog("LSL", 426, Some(2), "Loti"),
    Currency::catalog("LYD", 434, Some(3), "Libyan Dinar"),
    Currency::catalog("MAD", 504, Some(2), "Moroccan Dirham"),
    Currency::catalog("MDL", 498, Some(2), "Moldovan Leu"),
    Currency::catalog("MGA", 969, Some(2), "Malagasy Ariary"),
    Currency::catalog("MKD", 807, Some(2), "Denar"),
    Currency::catalog("MMK", 104, Some(2), "Kyat"),
    Currency::catalog("MNT", 496, Some(2), "Tugrik"),
    Currency::catalog("MOP", 446, Some(2), "Pataca"),
    Currency::catalog("MRU", 929, Some(2), "Ouguiya"),
    Currency::catalog("MUR", 480, Some(2), "Mauritius Rupee"),
    Currency::catalog("MVR", 462, Some(2), "Rufiyaa"),
    Currency::catalog("MWK", 454, Some(2), "Malawi Kwacha"),
    Currency::catalog("MXN", 484, Some(2), "Mexican Peso"),
    Currency::catalog("MXV", 979, Some(2), "Mexican Unidad de Inversion (UDI)"),
    Currency::catalog("MYR", 458, Some(2), "Malaysian Ringgit"),
    Currency::catalog("MZN", 943, Some(2), "Mozambique Metical"),
    Currency::catalog("NAD", 516, Some(2), "Namibia Dollar"),
    Currency::catalog("NGN", 566, Some(2), "Naira"),
    Currency::catalog("NIO", 558, Some(2), "Cordoba Oro"),
    Currency::catalog("NOK", 578, Some(2), "Norwegian Krone"),
    Currency::catalog("NPR", 524, Some(2), "Nepalese Rupee"),
    Currency::catalog("NZD", 554, Some(2), "New Zealand Dollar"),
    Currency::catalog("OMR", 512, Some(3), "Rial Omani"),
    Currency::catalog("PAB", 590, Some(2), "Balboa"),
    Currency::catalog("PEN", 604, Some(2), "Sol"),
    Currency::catalog("PGK", 598, Some(2), "Kina"),
    Currency::catalog("PHP", 608, Some(2), "Philippine Peso"),
    Currency::catalog("PKR", 586, Some(2), "Pakistan Rupee"),
    Currency::catalog("PLN", 985, Some(2), "Zloty"),
    Currency::catalog("PYG", 600, Some(0), "Guarani"),
    Currency::catalog("QAR", 634, Some(2), "Qatari Rial"),
    Currency::catalog("RON", 946, Some(2), "Romanian Leu"),
    Currency::catalog("RSD", 941, Some(2), "Serbian Dinar"),
    Currency::catalog("RUB", 643, Some(2), "Russian Ruble"),
    Currency::catalog("RWF", 646, Some(0), "Rwanda Franc"),
    Currency::catalog("SAR", 682, Some(2), "Saudi Riyal"),
    Currency::catalog("SBD", 90, Some(2), "Solomon Islands Dollar"),
    Currency::catalog("SCR", 690, Some(2), "Seychelles Rupee"),
    Currency::catalog("SDG", 938, Some(2), "Sudanese Pound"),
    Currency::catalog("SEK", 752, Some(2), "Swedish Krona"),
    Currency::catalog("SGD", 702, Some(2), "Singapore Dollar"),
    Currency::catalog("SHP", 654, Some(2), "Saint Helena Pound"),
    Currency::catalog("SLE", 925, Some(2), "Leone"),
    Currency::catalog("SLL", 694, Some(2), "Leone (old)"),
    Currency::catalog("SOS", 706, Some(2), "Somali Shilling"),
    Currency::catalog("SRD", 968, Some(2), "Surinam Dollar"),
    Currency::catalog("SSP", 728, Some(2), "South Sudanese Pound"),
    Currency::catalog("STN", 930, Some(2), "Dobra"),
    Currency::catalog("SVC", 222, Some(2), "El Salvador Colon"),
    Currency::catalog("SYP", 760, Some(2), "Syrian Pound"),
    Currency::catalog("SZL", 748, Some(2), "Lilangeni"),
    Currency::catalog("THB", 764, Some(2), "Baht"),
    Currency::catalog("TJS", 972, Some(2), "Somoni"),
    Currency::catalog("TMT", 934, Some(2), "Turkmenistan New Manat"),
    Currency::catalog("TND", 788, Some(3), "Tunisian Dinar"),
    Currency::catalog("TOP", 776, Some(2), "Pa'anga"),
    Currency::catalog("TRY", 949, Some(2), "Turkish Lira"),
    Currency::catalog("TTD", 780, Some(2), "Trinidad and Tobago Dollar"),
    Currency::catalog("TWD", 901, Some(2), "New Taiwan Dollar"),
    Currency::catalog("TZS", 834, Some(2), "Tanzanian Shilling"),
    Currency::catalog("UAH", 980, Some(2), "Hryvnia"),
    Currency::catalog("UGX", 800, Some(0), "Uganda Shilling"),
    Currency::catalog("USD", 840, Some(2), "US Dollar"),
    Currency::catalog("USN", 997, Some(2), "US Dollar (Next day)"),
    Currency::catalog("UYI", 940, Some(0), "Uruguay Peso en Unidades Indexadas (UI)"),
    Currency::catalog("UYU", 858, Some(2), "Peso Uruguayo"),
    Currency::catalog("UYW", 927, Some(4), "Unidad Previsional"),
    Currency::catalog("UZS", 860, Some(2), "Uzbekistan Sum"),
    Currency::catalog("VED", 926, Some(2), "Bolivar Soberano (digital)"),
    Currency::catalog("VES", 928, Some(2), "Bolivar Soberano"),
    Currency::catalog("VND", 704, Some(0), "Dong"),
    Currency::catalog("VUV", 548, Some(0), "Vatu"),
    Currency::catalog("WST", 882, Some(2), "Tala"),
    Currency::catalog("XAF", 950, Some(0), "CFA Franc BEAC"),
    Currency::catalog("XAG", 961, None, "Silver"),
    Currency::catalog("XAU", 959, None, "Gold"),
    Currency::catalog("XBA", 955, None, "Bond Markets Unit European Composite Unit (EURCO)"),
    Currency::catalog("XBB", 956, None, "Bond Markets Unit European Monetary Unit (E.M.U.-6)"),
    Currency::catalog("XBC", 957, None, "Bond Markets Unit European Unit of Account 9 (E.U.A.-9)"),
    Currency::catalog("XBD", 958, None, "Bond Markets Unit European Unit of Account 17 (E.U.A.-17)"),
    Currency::catalog("XCD", 951, Some(2), "East Caribbean Dollar"),
    Currency::catalog("XDR", 960, None, "SDR (Special Drawing Right)"),
    Currency::catalog("XOF", 952, Some(0), "CFA Franc BCEAO"),
    Currency::catalog("XPD", 964, None, "Palladium"),
    Currency::catalog("XPF", 953, Some(0), "CFP Franc"),
    Currency::catalog("XPT", 962, None, "Platinum"),
    Currency::catalog("XSU", 994, None, "Sucre"),
    Currency::catalog("XTS", 963, None, "Codes specifically reserved for testing purposes"),
    Currency::catalog("XUA", 965, None, "ADB Unit of Account"),
    Currency::catalog("XXX", 999, None, "No currency"),
    Currency::catalog("YER", 886, Some(2), "Yemeni Rial"),
    Currency::catalog("ZAR", 710, Some(2), "Rand"),
    Currency::catalog("ZMW", 967, Some(2), "Zambian Kwacha"),
    Currency::catalog("ZWL", 932, Some(2), "Zimbabwe Dollar"),
];
