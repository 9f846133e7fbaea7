//! Static catalog of travel destinations: every prefecture and the cities
//! offered for it.

use serde::Serialize;

/// A selectable destination city
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct City {
    /// Localized name shown to users
    pub name: &'static str,
    /// English name used for forecast lookups
    pub name_en: &'static str,
    /// Coarse area within the region
    pub area: &'static str,
}

/// A prefecture and its cities, in display order
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub cities: &'static [City],
}

/// All regions in catalog order
pub fn regions() -> &'static [Region] {
    REGIONS
}

/// Region names in catalog order
pub fn region_names() -> impl Iterator<Item = &'static str> {
    REGIONS.iter().map(|r| r.name)
}

pub fn find_region(region: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.name == region)
}

/// Cities of a region, `None` for an unknown region
pub fn cities_in(region: &str) -> Option<&'static [City]> {
    find_region(region).map(|r| r.cities)
}

/// Look up a city by its English name, ignoring ASCII case
pub fn find_city(region: &str, name_en: &str) -> Option<&'static City> {
    cities_in(region)?
        .iter()
        .find(|c| c.name_en.eq_ignore_ascii_case(name_en.trim()))
}

static REGIONS: &[Region] = &[
    Region {
        name: "北海道",
        cities: &[
            City { name: "札幌市", name_en: "Sapporo", area: "中央" },
            City { name: "旭川市", name_en: "Asahikawa", area: "北部" },
            City { name: "函館市", name_en: "Hakodate", area: "南部" },
        ],
    },
    Region {
        name: "青森県",
        cities: &[
            City { name: "青森市", name_en: "Aomori", area: "中央" },
            City { name: "八戸市", name_en: "Hachinohe", area: "南部" },
        ],
    },
    Region {
        name: "岩手県",
        cities: &[
            City { name: "盛岡市", name_en: "Morioka", area: "中央" },
            City { name: "一関市", name_en: "Ichinoseki", area: "南部" },
        ],
    },
    Region {
        name: "宮城県",
        cities: &[
            City { name: "仙台市", name_en: "Sendai", area: "中央" },
            City { name: "石巻市", name_en: "Ishinomaki", area: "北東部" },
        ],
    },
    Region {
        name: "秋田県",
        cities: &[
            City { name: "秋田市", name_en: "Akita", area: "中央" },
            City { name: "横手市", name_en: "Yokote", area: "南部" },
        ],
    },
    Region {
        name: "山形県",
        cities: &[
            City { name: "山形市", name_en: "Yamagata", area: "中央" },
            City { name: "鶴岡市", name_en: "Tsuruoka", area: "西部" },
        ],
    },
    Region {
        name: "福島県",
        cities: &[
            City { name: "福島市", name_en: "Fukushima", area: "中央" },
            City { name: "いわき市", name_en: "Iwaki", area: "南部" },
        ],
    },
    Region {
        name: "茨城県",
        cities: &[
            City { name: "水戸市", name_en: "Mito", area: "中央" },
            City { name: "土浦市", name_en: "Tsuchiura", area: "南部" },
        ],
    },
    Region {
        name: "栃木県",
        cities: &[
            City { name: "宇都宮市", name_en: "Utsunomiya", area: "中央" },
            City { name: "日光市", name_en: "Nikko", area: "北部" },
        ],
    },
    Region {
        name: "群馬県",
        cities: &[
            City { name: "前橋市", name_en: "Maebashi", area: "中央" },
            City { name: "高崎市", name_en: "Takasaki", area: "西部" },
        ],
    },
    Region {
        name: "埼玉県",
        cities: &[
            City { name: "さいたま市", name_en: "Saitama", area: "中央" },
            City { name: "川越市", name_en: "Kawagoe", area: "西部" },
        ],
    },
    Region {
        name: "千葉県",
        cities: &[
            City { name: "千葉市", name_en: "Chiba", area: "中央" },
            City { name: "銚子市", name_en: "Choshi", area: "東部" },
        ],
    },
    Region {
        name: "東京都",
        cities: &[
            City { name: "23区", name_en: "Tokyo", area: "中央" },
            City { name: "八王子市", name_en: "Hachioji", area: "西部" },
            City { name: "大島町", name_en: "Oshima", area: "島しょ部" },
        ],
    },
    Region {
        name: "神奈川県",
        cities: &[
            City { name: "横浜市", name_en: "Yokohama", area: "南部" },
            City { name: "小田原市", name_en: "Odawara", area: "西部" },
        ],
    },
    Region {
        name: "新潟県",
        cities: &[
            City { name: "新潟市", name_en: "Niigata", area: "中央" },
            City { name: "上越市", name_en: "Joetsu", area: "南部" },
        ],
    },
    Region {
        name: "富山県",
        cities: &[
            City { name: "富山市", name_en: "Toyama", area: "中央" },
            City { name: "高岡市", name_en: "Takaoka", area: "西部" },
        ],
    },
    Region {
        name: "石川県",
        cities: &[
            City { name: "金沢市", name_en: "Kanazawa", area: "中央" },
            City { name: "輪島市", name_en: "Wajima", area: "北部" },
        ],
    },
    Region {
        name: "福井県",
        cities: &[
            City { name: "福井市", name_en: "Fukui", area: "中央" },
            City { name: "敦賀市", name_en: "Tsuruga", area: "南部" },
        ],
    },
    Region {
        name: "山梨県",
        cities: &[
            City { name: "甲府市", name_en: "Kofu", area: "中央" },
            City { name: "富士吉田市", name_en: "Fujiyoshida", area: "北部" },
        ],
    },
    Region {
        name: "長野県",
        cities: &[
            City { name: "長野市", name_en: "Nagano", area: "中央" },
            City { name: "松本市", name_en: "Matsumoto", area: "西部" },
        ],
    },
    Region {
        name: "岐阜県",
        cities: &[
            City { name: "岐阜市", name_en: "Gifu", area: "中央" },
            City { name: "高山市", name_en: "Takayama", area: "北部" },
        ],
    },
    Region {
        name: "静岡県",
        cities: &[
            City { name: "静岡市", name_en: "Shizuoka", area: "中央" },
            City { name: "浜松市", name_en: "Hamamatsu", area: "西部" },
            City { name: "熱海市", name_en: "Atami", area: "東部" },
        ],
    },
    Region {
        name: "愛知県",
        cities: &[
            City { name: "名古屋市", name_en: "Nagoya", area: "中央" },
            City { name: "豊橋市", name_en: "Toyohashi", area: "東部" },
        ],
    },
    Region {
        name: "三重県",
        cities: &[
            City { name: "津市", name_en: "Tsu", area: "中央" },
            City { name: "伊勢市", name_en: "Ise", area: "南部" },
        ],
    },
    Region {
        name: "滋賀県",
        cities: &[
            City { name: "大津市", name_en: "Otsu", area: "中央" },
            City { name: "彦根市", name_en: "Hikone", area: "北部" },
        ],
    },
    Region {
        name: "京都府",
        cities: &[
            City { name: "京都市", name_en: "Kyoto", area: "中央" },
            City { name: "舞鶴市", name_en: "Maizuru", area: "北部" },
        ],
    },
    Region {
        name: "大阪府",
        cities: &[
            City { name: "大阪市", name_en: "Osaka", area: "中央" },
            City { name: "堺市", name_en: "Sakai", area: "南部" },
        ],
    },
    Region {
        name: "兵庫県",
        cities: &[
            City { name: "神戸市", name_en: "Kobe", area: "南部" },
            City { name: "姫路市", name_en: "Himeji", area: "西部" },
            City { name: "豊岡市", name_en: "Toyooka", area: "北部" },
        ],
    },
    Region {
        name: "奈良県",
        cities: &[
            City { name: "奈良市", name_en: "Nara", area: "中央" },
            City { name: "橿原市", name_en: "Kashihara", area: "南部" },
        ],
    },
    Region {
        name: "和歌山県",
        cities: &[
            City { name: "和歌山市", name_en: "Wakayama", area: "中央" },
            City { name: "新宮市", name_en: "Shingu", area: "南部" },
        ],
    },
    Region {
        name: "鳥取県",
        cities: &[
            City { name: "鳥取市", name_en: "Tottori", area: "中央" },
            City { name: "米子市", name_en: "Yonago", area: "西部" },
        ],
    },
    Region {
        name: "島根県",
        cities: &[
            City { name: "松江市", name_en: "Matsue", area: "中央" },
            City { name: "出雲市", name_en: "Izumo", area: "西部" },
        ],
    },
    Region {
        name: "岡山県",
        cities: &[
            City { name: "岡山市", name_en: "Okayama", area: "中央" },
            City { name: "倉敷市", name_en: "Kurashiki", area: "南部" },
        ],
    },
    Region {
        name: "広島県",
        cities: &[
            City { name: "広島市", name_en: "Hiroshima", area: "中央" },
            City { name: "福山市", name_en: "Fukuyama", area: "東部" },
        ],
    },
    Region {
        name: "山口県",
        cities: &[
            City { name: "山口市", name_en: "Yamaguchi", area: "中央" },
            City { name: "下関市", name_en: "Shimonoseki", area: "西部" },
        ],
    },
    Region {
        name: "徳島県",
        cities: &[
            City { name: "徳島市", name_en: "Tokushima", area: "中央" },
            City { name: "阿南市", name_en: "Anan", area: "南部" },
        ],
    },
    Region {
        name: "香川県",
        cities: &[
            City { name: "高松市", name_en: "Takamatsu", area: "中央" },
            City { name: "丸亀市", name_en: "Marugame", area: "南部" },
        ],
    },
    Region {
        name: "愛媛県",
        cities: &[
            City { name: "松山市", name_en: "Matsuyama", area: "中央" },
            City { name: "宇和島市", name_en: "Uwajima", area: "南部" },
        ],
    },
    Region {
        name: "高知県",
        cities: &[
            City { name: "高知市", name_en: "Kochi", area: "中央" },
            City { name: "宿毛市", name_en: "Sukumo", area: "西部" },
        ],
    },
    Region {
        name: "福岡県",
        cities: &[
            City { name: "福岡市", name_en: "Fukuoka", area: "北部" },
            City { name: "北九州市", name_en: "Kitakyushu", area: "北東部" },
        ],
    },
    Region {
        name: "佐賀県",
        cities: &[
            City { name: "佐賀市", name_en: "Saga", area: "中央" },
            City { name: "唐津市", name_en: "Karatsu", area: "西部" },
        ],
    },
    Region {
        name: "長崎県",
        cities: &[
            City { name: "長崎市", name_en: "Nagasaki", area: "中央" },
            City { name: "佐世保市", name_en: "Sasebo", area: "北部" },
            City { name: "壱岐市", name_en: "Iki", area: "離島" },
        ],
    },
    Region {
        name: "熊本県",
        cities: &[
            City { name: "熊本市", name_en: "Kumamoto", area: "中央" },
            City { name: "八代市", name_en: "Yatsushiro", area: "南部" },
        ],
    },
    Region {
        name: "大分県",
        cities: &[
            City { name: "大分市", name_en: "Oita", area: "中央" },
            City { name: "別府市", name_en: "Beppu", area: "北部" },
        ],
    },
    Region {
        name: "宮崎県",
        cities: &[
            City { name: "宮崎市", name_en: "Miyazaki", area: "中央" },
            City { name: "延岡市", name_en: "Nobeoka", area: "北部" },
        ],
    },
    Region {
        name: "鹿児島県",
        cities: &[
            City { name: "鹿児島市", name_en: "Kagoshima", area: "南部" },
            City { name: "奄美市", name_en: "Amami", area: "離島" },
        ],
    },
    Region {
        name: "沖縄県",
        cities: &[
            City { name: "那覇市", name_en: "Naha", area: "南部" },
            City { name: "名護市", name_en: "Nago", area: "北部" },
            City { name: "石垣市", name_en: "Ishigaki", area: "離島" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_prefectures_present() {
        assert_eq!(regions().len(), 47);
        let names: HashSet<_> = region_names().collect();
        assert_eq!(names.len(), 47);
        assert_eq!(regions()[0].name, "北海道");
        assert_eq!(regions()[46].name, "沖縄県");
    }

    #[test]
    fn test_every_region_has_cities() {
        for region in regions() {
            assert!(!region.cities.is_empty(), "{} has no cities", region.name);
            let en: HashSet<_> = region.cities.iter().map(|c| c.name_en).collect();
            assert_eq!(en.len(), region.cities.len(), "duplicate city in {}", region.name);
        }
    }

    #[test]
    fn test_cities_in_keeps_order() {
        let cities = cities_in("北海道").unwrap();
        let names: Vec<_> = cities.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["札幌市", "旭川市", "函館市"]);
        assert!(cities_in("Atlantis").is_none());
    }

    #[test]
    fn test_find_city() {
        let kyoto = find_city("京都府", "Kyoto").unwrap();
        assert_eq!(kyoto.name, "京都市");
        assert_eq!(kyoto.area, "中央");

        let tokyo = find_city("東京都", "tokyo").unwrap();
        assert_eq!(tokyo.name, "23区");

        assert!(find_city("東京都", "Kyoto").is_none());
        assert!(find_city("nowhere", "Kyoto").is_none());
    }
}
