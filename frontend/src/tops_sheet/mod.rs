pub mod yw_material_top_sheet;
