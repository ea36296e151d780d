//! Embedded Swiss city network.
//!
//! Twelve cities and a handful of rail, road and bus links between them.
//! Rail distances are timetable kilometres; road links without a distance
//! fall back to the great-circle distance.

use std::io::Cursor;

use rp_load::{load_links_reader, load_locations_reader};
use rp_spatial::{LinkGraph, LinkGraphBuilder, LocationIndex, LocationIndexBuilder};

pub const CITIES: &str = "\
Genève\tSwitzerland\t203000\t46.2044\t6.1432\n\
Lausanne\tSwitzerland\t140000\t46.5197\t6.6323\n\
Fribourg\tSwitzerland\t38000\t46.8065\t7.1620\n\
Bern\tSwitzerland\t134000\t46.9480\t7.4474\n\
Biel\tSwitzerland\t55000\t47.1368\t7.2468\n\
Olten\tSwitzerland\t18000\t47.3499\t7.9033\n\
Basel\tSwitzerland\t173000\t47.5596\t7.5886\n\
Aarau\tSwitzerland\t21000\t47.3925\t8.0444\n\
Luzern\tSwitzerland\t82000\t47.0502\t8.3093\n\
Zürich\tSwitzerland\t421000\t47.3769\t8.5417\n\
Winterthur\tSwitzerland\t114000\t47.5001\t8.7240\n\
St. Gallen\tSwitzerland\t76000\t47.4245\t9.3767\n\
";

pub const LINKS: &str = "\
Genève\tLausanne\trail\t60\n\
Lausanne\tFribourg\trail\t70\n\
Fribourg\tBern\trail\t32\n\
Lausanne\tBiel\trail\t98\n\
Biel\tBern\trail\t34\n\
Biel\tOlten\trail\t61\n\
Bern\tOlten\trail\t67\n\
Basel\tOlten\trail\t39\n\
Olten\tAarau\trail\t13\n\
Aarau\tZürich\trail\t41\n\
Olten\tZürich\trail\t60\n\
Olten\tLuzern\trail\t55\n\
Luzern\tZürich\trail\t57\n\
Zürich\tWinterthur\trail\t26\n\
Winterthur\tSt. Gallen\trail\t55\n\
Genève\tLausanne\troad\t64\n\
Lausanne\tFribourg\troad\n\
Fribourg\tBern\troad\n\
Bern\tOlten\troad\n\
Olten\tAarau\troad\n\
Aarau\tZürich\troad\n\
Basel\tZürich\troad\t87\n\
Zürich\tWinterthur\troad\n\
Winterthur\tSt. Gallen\troad\n\
Bern\tBiel\tbus\n\
";

/// Load the embedded cities and links.
pub fn build_network() -> anyhow::Result<(LocationIndex, LinkGraph)> {
    let mut ib = LocationIndexBuilder::new();
    load_locations_reader(Cursor::new(CITIES), &mut ib)?;
    let index = ib.build();

    let mut gb = LinkGraphBuilder::new();
    load_links_reader(Cursor::new(LINKS), &index, &mut gb)?;
    Ok((index, gb.build()))
}
