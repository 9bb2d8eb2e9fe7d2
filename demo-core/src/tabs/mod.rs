mod classic;
mod constellations;
mod explorer;
mod legend;
mod search;
