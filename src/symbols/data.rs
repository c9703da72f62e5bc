//! Named symbol tables
//!
//! Single letters and digits are added by [`super::create_symbols`]; these
//! tables hold everything else.

use phf::phf_map;

use super::types::{Atom, CharInfo, Font, Group, NonAtom};

/// Symbols accepted in math mode.
pub static MATH_SYMBOLS: phf::Map<&'static str, CharInfo> = phf_map! {
    "\\equiv" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2261}')),
    "\\prec" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{227a}')),
    "\\succ" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{227b}')),
    "\\sim" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{223c}')),
    "\\perp" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{22a5}')),
    "\\preceq" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2aaf}')),
    "\\succeq" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2ab0}')),
    "\\simeq" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2243}')),
    "\\mid" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2223}')),
    "\\ll" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{226a}')),
    "\\gg" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{226b}')),
    "\\asymp" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{224d}')),
    "\\parallel" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2225}')),
    "\\bowtie" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{22c8}')),
    "\\smile" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2323}')),
    "\\sqsubseteq" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2291}')),
    "\\sqsupseteq" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2292}')),
    "\\doteq" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2250}')),
    "\\frown" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2322}')),
    "\\ni" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{220b}')),
    "\\propto" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{221d}')),
    "\\vdash" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{22a2}')),
    "\\dashv" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{22a3}')),
    "\\owns" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{220b}')),
    "\\ldotp" => CharInfo::new(Font::Main, Group::Atom(Atom::Punct), Some('.')),
    "\\cdotp" => CharInfo::new(Font::Main, Group::Atom(Atom::Punct), Some('\u{22c5}')),
    "\\#" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('#')),
    "\\&" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('&')),
    "\\aleph" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2135}')),
    "\\forall" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2200}')),
    "\\hbar" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{210f}')),
    "\\exists" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2203}')),
    "\\nabla" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2207}')),
    "\\flat" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{266d}')),
    "\\ell" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2113}')),
    "\\natural" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{266e}')),
    "\\clubsuit" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2663}')),
    "\\wp" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2118}')),
    "\\sharp" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{266f}')),
    "\\diamondsuit" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2662}')),
    "\\Re" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{211c}')),
    "\\heartsuit" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2661}')),
    "\\Im" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2111}')),
    "\\spadesuit" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2660}')),
    "\\dag" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2020}')),
    "\\ddag" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2021}')),
    "\\rmoustache" => CharInfo::new(Font::Main, Group::Atom(Atom::Close), Some('\u{23b1}')),
    "\\lmoustache" => CharInfo::new(Font::Main, Group::Atom(Atom::Open), Some('\u{23b0}')),
    "\\rgroup" => CharInfo::new(Font::Main, Group::Atom(Atom::Close), Some('\u{27ef}')),
    "\\lgroup" => CharInfo::new(Font::Main, Group::Atom(Atom::Open), Some('\u{27ee}')),
    "\\mp" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2213}')),
    "\\ominus" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2296}')),
    "\\uplus" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{228e}')),
    "\\sqcap" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2293}')),
    "\\ast" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2217}')),
    "\\sqcup" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2294}')),
    "\\bigcirc" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{25ef}')),
    "\\bullet" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2219}')),
    "\\ddagger" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2021}')),
    "\\wr" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2240}')),
    "\\amalg" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2a3f}')),
    "\\longleftarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{27f5}')),
    "\\Leftarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{21d0}')),
    "\\Longleftarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{27f8}')),
    "\\longrightarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{27f6}')),
    "\\Rightarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{21d2}')),
    "\\Longrightarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{27f9}')),
    "\\leftrightarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2194}')),
    "\\longleftrightarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{27f7}')),
    "\\Leftrightarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{21d4}')),
    "\\Longleftrightarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{27fa}')),
    "\\mapsto" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{21a6}')),
    "\\longmapsto" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{27fc}')),
    "\\nearrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2197}')),
    "\\hookleftarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{21a9}')),
    "\\hookrightarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{21aa}')),
    "\\searrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2198}')),
    "\\leftharpoonup" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{21bc}')),
    "\\rightharpoonup" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{21c0}')),
    "\\swarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2199}')),
    "\\leftharpoondown" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{21bd}')),
    "\\rightharpoondown" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{21c1}')),
    "\\nwarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2196}')),
    "\\rightleftharpoons" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{21cc}')),
    "\\nless" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{226e}')),
    "\\nleqslant" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{e010}')),
    "\\nleqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{e011}')),
    "\\lneq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2a87}')),
    "\\lneqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2268}')),
    "\\lvertneqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{e00c}')),
    "\\lnsim" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22e6}')),
    "\\lnapprox" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2a89}')),
    "\\nprec" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2280}')),
    "\\npreceq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22e0}')),
    "\\precnsim" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22e8}')),
    "\\precnapprox" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2ab9}')),
    "\\nsim" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2241}')),
    "\\nshortmid" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{e006}')),
    "\\nmid" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2224}')),
    "\\nvdash" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22ac}')),
    "\\nvDash" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22ad}')),
    "\\ntriangleleft" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22ea}')),
    "\\ntrianglelefteq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22ec}')),
    "\\subsetneq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{228a}')),
    "\\varsubsetneq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{e01a}')),
    "\\subsetneqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2acb}')),
    "\\varsubsetneqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{e017}')),
    "\\ngtr" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{226f}')),
    "\\ngeqslant" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{e00f}')),
    "\\ngeqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{e00e}')),
    "\\gneq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2a88}')),
    "\\gneqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2269}')),
    "\\gvertneqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{e00d}')),
    "\\gnsim" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22e7}')),
    "\\gnapprox" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2a8a}')),
    "\\nsucc" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2281}')),
    "\\nsucceq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22e1}')),
    "\\succnsim" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22e9}')),
    "\\succnapprox" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2aba}')),
    "\\ncong" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2246}')),
    "\\nshortparallel" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{e007}')),
    "\\nparallel" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2226}')),
    "\\nVDash" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22af}')),
    "\\ntriangleright" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22eb}')),
    "\\ntrianglerighteq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22ed}')),
    "\\nsupseteqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{e018}')),
    "\\supsetneq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{228b}')),
    "\\varsupsetneq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{e01b}')),
    "\\supsetneqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2acc}')),
    "\\varsupsetneqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{e019}')),
    "\\nVdash" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22ae}')),
    "\\precneqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2ab5}')),
    "\\succneqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2ab6}')),
    "\\nsubseteqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{e016}')),
    "\\unlhd" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22b4}')),
    "\\unrhd" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22b5}')),
    "\\nrightarrow" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{219b}')),
    "\\nLeftarrow" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21cd}')),
    "\\nRightarrow" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21cf}')),
    "\\nleftrightarrow" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21ae}')),
    "\\nLeftrightarrow" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21ce}')),
    "\\vartriangle" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{25b3}')),
    "\\hslash" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{210f}')),
    "\\triangledown" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{25bd}')),
    "\\lozenge" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{25ca}')),
    "\\circledS" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{24c8}')),
    "\\circledR" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{ae}')),
    "\\measuredangle" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2221}')),
    "\\nexists" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2204}')),
    "\\mho" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2127}')),
    "\\Finv" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2132}')),
    "\\Game" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2141}')),
    "\\Bbbk" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('k')),
    "\\backprime" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2035}')),
    "\\blacktriangle" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{25b2}')),
    "\\blacktriangledown" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{25bc}')),
    "\\blacksquare" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{25a0}')),
    "\\blacklozenge" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{29eb}')),
    "\\bigstar" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2605}')),
    "\\sphericalangle" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2222}')),
    "\\complement" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2201}')),
    "\\eth" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{f0}')),
    "\\diagup" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2571}')),
    "\\diagdown" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2572}')),
    "\\square" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{25a1}')),
    "\\Box" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{25a1}')),
    "\\Diamond" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{25ca}')),
    "\\yen" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{a5}')),
    "\\checkmark" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2713}')),
    "\\beth" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2136}')),
    "\\daleth" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2138}')),
    "\\gimel" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2137}')),
    "\\digamma" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{3dd}')),
    "\\varkappa" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{3f0}')),
    "\\ulcorner" => CharInfo::new(Font::Ams, Group::Atom(Atom::Open), Some('\u{250c}')),
    "\\urcorner" => CharInfo::new(Font::Ams, Group::Atom(Atom::Close), Some('\u{2510}')),
    "\\llcorner" => CharInfo::new(Font::Ams, Group::Atom(Atom::Open), Some('\u{2514}')),
    "\\lrcorner" => CharInfo::new(Font::Ams, Group::Atom(Atom::Close), Some('\u{2518}')),
    "\\leqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2266}')),
    "\\leqslant" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2a7d}')),
    "\\eqslantless" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2a95}')),
    "\\lesssim" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2272}')),
    "\\lessapprox" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2a85}')),
    "\\approxeq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{224a}')),
    "\\lessdot" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22d6}')),
    "\\lll" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22d8}')),
    "\\lessgtr" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2276}')),
    "\\lesseqgtr" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22da}')),
    "\\lesseqqgtr" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2a8b}')),
    "\\doteqdot" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2251}')),
    "\\risingdotseq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2253}')),
    "\\fallingdotseq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2252}')),
    "\\backsim" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{223d}')),
    "\\backsimeq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22cd}')),
    "\\subseteqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2ac5}')),
    "\\Subset" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22d0}')),
    "\\sqsubset" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{228f}')),
    "\\preccurlyeq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{227c}')),
    "\\curlyeqprec" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22de}')),
    "\\precsim" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{227e}')),
    "\\precapprox" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2ab7}')),
    "\\vartriangleleft" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22b2}')),
    "\\trianglelefteq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22b4}')),
    "\\vDash" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22a8}')),
    "\\Vvdash" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22aa}')),
    "\\smallsmile" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2323}')),
    "\\smallfrown" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2322}')),
    "\\bumpeq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{224f}')),
    "\\Bumpeq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{224e}')),
    "\\geqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2267}')),
    "\\geqslant" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2a7e}')),
    "\\eqslantgtr" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2a96}')),
    "\\gtrsim" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2273}')),
    "\\gtrapprox" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2a86}')),
    "\\gtrdot" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22d7}')),
    "\\ggg" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22d9}')),
    "\\gtrless" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2277}')),
    "\\gtreqless" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22db}')),
    "\\gtreqqless" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2a8c}')),
    "\\eqcirc" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2256}')),
    "\\circeq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2257}')),
    "\\triangleq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{225c}')),
    "\\thicksim" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{223c}')),
    "\\thickapprox" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2248}')),
    "\\supseteqq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2ac6}')),
    "\\Supset" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22d1}')),
    "\\sqsupset" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2290}')),
    "\\succcurlyeq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{227d}')),
    "\\curlyeqsucc" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22df}')),
    "\\succsim" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{227f}')),
    "\\succapprox" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2ab8}')),
    "\\vartriangleright" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22b3}')),
    "\\trianglerighteq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22b5}')),
    "\\Vdash" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22a9}')),
    "\\shortmid" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2223}')),
    "\\shortparallel" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2225}')),
    "\\between" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{226c}')),
    "\\pitchfork" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22d4}')),
    "\\varpropto" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{221d}')),
    "\\blacktriangleleft" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{25c0}')),
    "\\therefore" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2234}')),
    "\\backepsilon" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{220d}')),
    "\\blacktriangleright" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{25b6}')),
    "\\because" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2235}')),
    "\\llless" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22d8}')),
    "\\gggtr" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22d9}')),
    "\\lhd" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22b2}')),
    "\\rhd" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22b3}')),
    "\\eqsim" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2242}')),
    "\\Join" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{22c8}')),
    "\\Doteq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2251}')),
    "\\dotplus" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{2214}')),
    "\\smallsetminus" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{2216}')),
    "\\Cap" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22d2}')),
    "\\Cup" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22d3}')),
    "\\doublebarwedge" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{2a5e}')),
    "\\boxminus" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{229f}')),
    "\\boxplus" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{229e}')),
    "\\divideontimes" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22c7}')),
    "\\ltimes" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22c9}')),
    "\\rtimes" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22ca}')),
    "\\leftthreetimes" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22cb}')),
    "\\rightthreetimes" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22cc}')),
    "\\curlywedge" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22cf}')),
    "\\curlyvee" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22ce}')),
    "\\circleddash" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{229d}')),
    "\\circledast" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{229b}')),
    "\\centerdot" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22c5}')),
    "\\intercal" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22ba}')),
    "\\doublecap" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22d2}')),
    "\\doublecup" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22d3}')),
    "\\boxtimes" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22a0}')),
    "\\dashrightarrow" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21e2}')),
    "\\dashleftarrow" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21e0}')),
    "\\leftleftarrows" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21c7}')),
    "\\leftrightarrows" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21c6}')),
    "\\Lleftarrow" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21da}')),
    "\\twoheadleftarrow" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{219e}')),
    "\\leftarrowtail" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21a2}')),
    "\\looparrowleft" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21ab}')),
    "\\leftrightharpoons" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21cb}')),
    "\\curvearrowleft" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21b6}')),
    "\\circlearrowleft" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21ba}')),
    "\\Lsh" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21b0}')),
    "\\upuparrows" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21c8}')),
    "\\upharpoonleft" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21bf}')),
    "\\downharpoonleft" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21c3}')),
    "\\multimap" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{22b8}')),
    "\\leftrightsquigarrow" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21ad}')),
    "\\rightrightarrows" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21c9}')),
    "\\rightleftarrows" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21c4}')),
    "\\twoheadrightarrow" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21a0}')),
    "\\rightarrowtail" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21a3}')),
    "\\looparrowright" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21ac}')),
    "\\curvearrowright" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21b7}')),
    "\\circlearrowright" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21bb}')),
    "\\Rsh" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21b1}')),
    "\\downdownarrows" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21ca}')),
    "\\upharpoonright" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21be}')),
    "\\downharpoonright" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21c2}')),
    "\\rightsquigarrow" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21dd}')),
    "\\leadsto" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21dd}')),
    "\\Rrightarrow" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21db}')),
    "\\restriction" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{21be}')),
    "`" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2018}')),
    "\\$" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('$')),
    "\\%" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('%')),
    "\\_" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('_')),
    "\\angle" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2220}')),
    "\\infty" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{221e}')),
    "\\prime" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2032}')),
    "\\triangle" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{25b3}')),
    "\\Gamma" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{393}')),
    "\\Delta" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{394}')),
    "\\Theta" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{398}')),
    "\\Lambda" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{39b}')),
    "\\Xi" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{39e}')),
    "\\Pi" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{3a0}')),
    "\\Sigma" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{3a3}')),
    "\\Upsilon" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{3a5}')),
    "\\Phi" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{3a6}')),
    "\\Psi" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{3a8}')),
    "\\Omega" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{3a9}')),
    "\\neg" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{ac}')),
    "\\lnot" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{ac}')),
    "\\top" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{22a4}')),
    "\\bot" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{22a5}')),
    "\\emptyset" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2205}')),
    "\\varnothing" => CharInfo::new(Font::Ams, Group::NonAtom(NonAtom::TextOrd), Some('\u{2205}')),
    "\\alpha" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3b1}')),
    "\\beta" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3b2}')),
    "\\gamma" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3b3}')),
    "\\delta" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3b4}')),
    "\\epsilon" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3f5}')),
    "\\zeta" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3b6}')),
    "\\eta" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3b7}')),
    "\\theta" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3b8}')),
    "\\iota" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3b9}')),
    "\\kappa" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3ba}')),
    "\\lambda" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3bb}')),
    "\\mu" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3bc}')),
    "\\nu" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3bd}')),
    "\\xi" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3be}')),
    "\\omicron" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('o')),
    "\\pi" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3c0}')),
    "\\rho" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3c1}')),
    "\\sigma" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3c3}')),
    "\\tau" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3c4}')),
    "\\upsilon" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3c5}')),
    "\\phi" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3d5}')),
    "\\chi" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3c7}')),
    "\\psi" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3c8}')),
    "\\omega" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3c9}')),
    "\\varepsilon" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3b5}')),
    "\\vartheta" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3d1}')),
    "\\varpi" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3d6}')),
    "\\varrho" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3f1}')),
    "\\varsigma" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3c2}')),
    "\\varphi" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{3c6}')),
    "*" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2217}')),
    "+" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), None),
    "-" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2212}')),
    "\\cdot" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{22c5}')),
    "\\circ" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2218}')),
    "\\div" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{f7}')),
    "\\pm" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{b1}')),
    "\\times" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{d7}')),
    "\\cap" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2229}')),
    "\\cup" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{222a}')),
    "\\setminus" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2216}')),
    "\\land" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2227}')),
    "\\lor" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2228}')),
    "\\wedge" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2227}')),
    "\\vee" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2228}')),
    "\\surd" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{221a}')),
    "(" => CharInfo::new(Font::Main, Group::Atom(Atom::Open), None),
    "[" => CharInfo::new(Font::Main, Group::Atom(Atom::Open), None),
    "\\langle" => CharInfo::new(Font::Main, Group::Atom(Atom::Open), Some('\u{27e8}')),
    "\\lvert" => CharInfo::new(Font::Main, Group::Atom(Atom::Open), Some('\u{2223}')),
    "\\lVert" => CharInfo::new(Font::Main, Group::Atom(Atom::Open), Some('\u{2225}')),
    ")" => CharInfo::new(Font::Main, Group::Atom(Atom::Close), None),
    "]" => CharInfo::new(Font::Main, Group::Atom(Atom::Close), None),
    "?" => CharInfo::new(Font::Main, Group::Atom(Atom::Close), None),
    "!" => CharInfo::new(Font::Main, Group::Atom(Atom::Close), None),
    "\\rangle" => CharInfo::new(Font::Main, Group::Atom(Atom::Close), Some('\u{27e9}')),
    "\\rvert" => CharInfo::new(Font::Main, Group::Atom(Atom::Close), Some('\u{2223}')),
    "\\rVert" => CharInfo::new(Font::Main, Group::Atom(Atom::Close), Some('\u{2225}')),
    "=" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), None),
    "<" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), None),
    ">" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), None),
    ":" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), None),
    "\\approx" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2248}')),
    "\\cong" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2245}')),
    "\\ge" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2265}')),
    "\\geq" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2265}')),
    "\\gets" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2190}')),
    "\\in" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2208}')),
    "\\notin" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2209}')),
    "\\subset" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2282}')),
    "\\supset" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2283}')),
    "\\subseteq" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2286}')),
    "\\supseteq" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2287}')),
    "\\nsubseteq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2288}')),
    "\\nsupseteq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2289}')),
    "\\models" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{22a8}')),
    "\\leftarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2190}')),
    "\\le" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2264}')),
    "\\leq" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2264}')),
    "\\ne" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2260}')),
    "\\neq" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2260}')),
    "\\rightarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2192}')),
    "\\to" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2192}')),
    "\\ngeq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2271}')),
    "\\nleq" => CharInfo::new(Font::Ams, Group::Atom(Atom::Rel), Some('\u{2270}')),
    "\\!" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::Spacing), None),
    "\\ " => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::Spacing), Some('\u{a0}')),
    "~" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::Spacing), Some('\u{a0}')),
    "\\," => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::Spacing), None),
    "\\:" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::Spacing), None),
    "\\;" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::Spacing), None),
    "\\enspace" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::Spacing), None),
    "\\qquad" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::Spacing), None),
    "\\quad" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::Spacing), None),
    "\\space" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::Spacing), Some('\u{a0}')),
    "," => CharInfo::new(Font::Main, Group::Atom(Atom::Punct), None),
    ";" => CharInfo::new(Font::Main, Group::Atom(Atom::Punct), None),
    "\\colon" => CharInfo::new(Font::Main, Group::Atom(Atom::Punct), Some(':')),
    "\\barwedge" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22bc}')),
    "\\veebar" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22bb}')),
    "\\odot" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2299}')),
    "\\oplus" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2295}')),
    "\\otimes" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2297}')),
    "\\partial" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2202}')),
    "\\oslash" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2298}')),
    "\\circledcirc" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{229a}')),
    "\\boxdot" => CharInfo::new(Font::Ams, Group::Atom(Atom::Bin), Some('\u{22a1}')),
    "\\bigtriangleup" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{25b3}')),
    "\\bigtriangledown" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{25bd}')),
    "\\dagger" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{2020}')),
    "\\diamond" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{22c4}')),
    "\\star" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{22c6}')),
    "\\triangleleft" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{25c3}')),
    "\\triangleright" => CharInfo::new(Font::Main, Group::Atom(Atom::Bin), Some('\u{25b9}')),
    "\\{" => CharInfo::new(Font::Main, Group::Atom(Atom::Open), Some('{')),
    "\\}" => CharInfo::new(Font::Main, Group::Atom(Atom::Close), None),
    "\\lbrace" => CharInfo::new(Font::Main, Group::Atom(Atom::Open), Some('{')),
    "\\rbrace" => CharInfo::new(Font::Main, Group::Atom(Atom::Close), None),
    "\\lbrack" => CharInfo::new(Font::Main, Group::Atom(Atom::Open), Some('[')),
    "\\rbrack" => CharInfo::new(Font::Main, Group::Atom(Atom::Close), Some(']')),
    "\\lfloor" => CharInfo::new(Font::Main, Group::Atom(Atom::Open), Some('\u{230a}')),
    "\\rfloor" => CharInfo::new(Font::Main, Group::Atom(Atom::Close), Some('\u{230b}')),
    "\\lceil" => CharInfo::new(Font::Main, Group::Atom(Atom::Open), Some('\u{2308}')),
    "\\rceil" => CharInfo::new(Font::Main, Group::Atom(Atom::Close), Some('\u{2309}')),
    "\\backslash" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\\')),
    "|" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2223}')),
    "\\vert" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2223}')),
    "\\|" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2225}')),
    "\\Vert" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{2225}')),
    "\\uparrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2191}')),
    "\\Uparrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{21d1}')),
    "\\downarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2193}')),
    "\\Downarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{21d3}')),
    "\\updownarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{2195}')),
    "\\Updownarrow" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{21d5}')),
    "\\coprod" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{2210}')),
    "\\bigvee" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{22c1}')),
    "\\bigwedge" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{22c0}')),
    "\\biguplus" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{2a04}')),
    "\\bigcap" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{22c2}')),
    "\\bigcup" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{22c3}')),
    "\\int" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{222b}')),
    "\\intop" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{222b}')),
    "\\iint" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{222c}')),
    "\\iiint" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{222d}')),
    "\\prod" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{220f}')),
    "\\sum" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{2211}')),
    "\\bigotimes" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{2a02}')),
    "\\bigoplus" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{2a01}')),
    "\\bigodot" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{2a00}')),
    "\\oint" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{222e}')),
    "\\bigsqcup" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{2a06}')),
    "\\smallint" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::OpToken), Some('\u{222b}')),
    "\\ldots" => CharInfo::new(Font::Main, Group::Atom(Atom::Inner), Some('\u{2026}')),
    "\\cdots" => CharInfo::new(Font::Main, Group::Atom(Atom::Inner), Some('\u{22ef}')),
    "\\ddots" => CharInfo::new(Font::Main, Group::Atom(Atom::Inner), Some('\u{22f1}')),
    "\\vdots" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::TextOrd), Some('\u{22ee}')),
    "\\acute" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::AccentToken), Some('\u{b4}')),
    "\\grave" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::AccentToken), Some('`')),
    "\\ddot" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::AccentToken), Some('\u{a8}')),
    "\\tilde" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::AccentToken), Some('~')),
    "\\bar" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::AccentToken), Some('\u{af}')),
    "\\breve" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::AccentToken), Some('\u{2d8}')),
    "\\check" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::AccentToken), Some('\u{2c7}')),
    "\\hat" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::AccentToken), Some('^')),
    "\\vec" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::AccentToken), Some('\u{20d7}')),
    "\\dot" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::AccentToken), Some('\u{2d9}')),
    "\\imath" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{131}')),
    "\\jmath" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::MathOrd), Some('\u{237}')),
    "\\not" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('\u{338}')),
    "\\nobreakspace" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::Spacing), Some('\u{a0}')),
    "\\lt" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('<')),
    "\\gt" => CharInfo::new(Font::Main, Group::Atom(Atom::Rel), Some('>')),
};

/// Symbols accepted in text mode.
pub static TEXT_SYMBOLS: phf::Map<&'static str, CharInfo> = phf_map! {
    "\\ " => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::Spacing), Some('\u{a0}')),
    " " => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::Spacing), Some('\u{a0}')),
    "~" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::Spacing), Some('\u{a0}')),
    "\\nobreakspace" => CharInfo::new(Font::Main, Group::NonAtom(NonAtom::Spacing), Some('\u{a0}')),
};
