//! Static crystallographic operator data.
//!
//! `OPERATORS` lists every distinct general-position operator used by the
//! supported space groups, one row expression per fractional axis.
//! `SPACEGROUPS` maps a canonical Hermann-Mauguin name to indices into
//! `OPERATORS`; the first index of every group is the identity. Centered
//! lattices list their centering translations as separate operators.

use phf::{Map, phf_map};

pub(super) static OPERATORS: &[[&str; 3]] = &[
    ["x", "y", "z"],                  // 0
    ["-x", "-y", "-z"],               // 1
    ["-x", "y", "-z"],                // 2
    ["-x", "y+1/2", "-z"],            // 3
    ["x+1/2", "y+1/2", "z"],          // 4
    ["-x+1/2", "y+1/2", "-z"],        // 5
    ["x+1/2", "y+1/2", "z+1/2"],      // 6
    ["-x+1/2", "y+1/2", "-z+1/2"],    // 7
    ["-x", "-y", "z"],                // 8
    ["x", "-y", "-z"],                // 9
    ["-x", "-y", "z+1/2"],            // 10
    ["-x", "y", "-z+1/2"],            // 11
    ["x+1/2", "-y+1/2", "-z"],        // 12
    ["-x+1/2", "-y", "z+1/2"],        // 13
    ["-x", "y+1/2", "-z+1/2"],        // 14
    ["-x+1/2", "-y+1/2", "z+1/2"],    // 15
    ["-x+1/2", "-y+1/2", "z"],        // 16
    ["x", "y+1/2", "z+1/2"],          // 17
    ["-x", "-y+1/2", "z+1/2"],        // 18
    ["x", "-y+1/2", "-z+1/2"],        // 19
    ["x+1/2", "y", "z+1/2"],          // 20
    ["-x+1/2", "y", "-z+1/2"],        // 21
    ["x+1/2", "-y", "-z+1/2"],        // 22
    ["x+1/2", "-y+1/2", "-z+1/2"],    // 23
    ["-x", "-y+1/2", "z"],            // 24
    ["-x+1/2", "y", "-z"],            // 25
    ["x", "-y", "-z+1/2"],            // 26
    ["-y", "x", "z"],                 // 27
    ["y", "-x", "z"],                 // 28
    ["-y", "x", "z+1/4"],             // 29
    ["y", "-x", "z+3/4"],             // 30
    ["-y", "x", "z+1/2"],             // 31
    ["y", "-x", "z+1/2"],             // 32
    ["-y", "x", "z+3/4"],             // 33
    ["y", "-x", "z+1/4"],             // 34
    ["-y+1/2", "x+1/2", "z+1/2"],     // 35
    ["y+1/2", "-x+1/2", "z+1/2"],     // 36
    ["-y", "x+1/2", "z+1/4"],         // 37
    ["y+1/2", "-x", "z+3/4"],         // 38
    ["-y+1/2", "x", "z+3/4"],         // 39
    ["y", "-x+1/2", "z+1/4"],         // 40
    ["y", "x", "-z"],                 // 41
    ["-y", "-x", "-z"],               // 42
    ["-y+1/2", "x+1/2", "z"],         // 43
    ["y+1/2", "-x+1/2", "z"],         // 44
    ["y", "x", "-z+3/4"],             // 45
    ["-y", "-x", "-z+1/4"],           // 46
    ["-y+1/2", "x+1/2", "z+1/4"],     // 47
    ["y+1/2", "-x+1/2", "z+3/4"],     // 48
    ["-x+1/2", "y+1/2", "-z+1/4"],    // 49
    ["x+1/2", "-y+1/2", "-z+3/4"],    // 50
    ["-y", "-x", "-z+1/2"],           // 51
    ["y", "x", "-z+1/4"],             // 52
    ["-y", "-x", "-z+3/4"],           // 53
    ["-y+1/2", "x+1/2", "z+3/4"],     // 54
    ["y+1/2", "-x+1/2", "z+1/4"],     // 55
    ["-x+1/2", "y+1/2", "-z+3/4"],    // 56
    ["x+1/2", "-y+1/2", "-z+1/4"],    // 57
    ["y+1/2", "x+1/2", "-z+1/2"],     // 58
    ["-y+1/2", "-x+1/2", "-z+1/2"],   // 59
    ["-y", "x-y", "z"],               // 60
    ["-x+y", "-x", "z"],              // 61
    ["-y", "x-y", "z+1/3"],           // 62
    ["-x+y", "-x", "z+2/3"],          // 63
    ["-y", "x-y", "z+2/3"],           // 64
    ["-x+y", "-x", "z+1/3"],          // 65
    ["x+2/3", "y+1/3", "z+1/3"],      // 66
    ["-y+2/3", "x-y+1/3", "z+1/3"],   // 67
    ["-x+y+2/3", "-x+1/3", "z+1/3"],  // 68
    ["x+1/3", "y+2/3", "z+2/3"],      // 69
    ["-y+1/3", "x-y+2/3", "z+2/3"],   // 70
    ["-x+y+1/3", "-x+2/3", "z+2/3"],  // 71
    ["-x+y", "y", "-z"],              // 72
    ["x", "x-y", "-z"],               // 73
    ["x-y", "-y", "-z"],              // 74
    ["-x", "-x+y", "-z"],             // 75
    ["-y", "-x", "-z+2/3"],           // 76
    ["-x+y", "y", "-z+1/3"],          // 77
    ["x-y", "-y", "-z+2/3"],          // 78
    ["-x", "-x+y", "-z+1/3"],         // 79
    ["-y", "-x", "-z+1/3"],           // 80
    ["-x+y", "y", "-z+2/3"],          // 81
    ["x-y", "-y", "-z+1/3"],          // 82
    ["-x", "-x+y", "-z+2/3"],         // 83
    ["y+2/3", "x+1/3", "-z+1/3"],     // 84
    ["x-y+2/3", "-y+1/3", "-z+1/3"],  // 85
    ["-x+2/3", "-x+y+1/3", "-z+1/3"], // 86
    ["y+1/3", "x+2/3", "-z+2/3"],     // 87
    ["x-y+1/3", "-y+2/3", "-z+2/3"],  // 88
    ["-x+1/3", "-x+y+2/3", "-z+2/3"], // 89
    ["y", "-x+y", "z"],               // 90
    ["x-y", "x", "z"],                // 91
    ["y", "-x+y", "z+5/6"],           // 92
    ["x-y", "x", "z+1/6"],            // 93
    ["y", "-x+y", "z+1/6"],           // 94
    ["x-y", "x", "z+5/6"],            // 95
    ["y", "-x+y", "z+2/3"],           // 96
    ["x-y", "x", "z+1/3"],            // 97
    ["y", "-x+y", "z+1/3"],           // 98
    ["x-y", "x", "z+2/3"],            // 99
    ["y", "-x+y", "z+1/2"],           // 100
    ["x-y", "x", "z+1/2"],            // 101
    ["y", "x", "-z+1/3"],             // 102
    ["-y", "-x", "-z+5/6"],           // 103
    ["-x+y", "y", "-z+1/2"],          // 104
    ["x", "x-y", "-z+1/6"],           // 105
    ["y", "x", "-z+2/3"],             // 106
    ["-y", "-x", "-z+1/6"],           // 107
    ["x", "x-y", "-z+5/6"],           // 108
    ["x", "x-y", "-z+1/2"],           // 109
    ["z", "x", "y"],                  // 110
    ["z", "-x", "-y"],                // 111
    ["-z", "-x", "y"],                // 112
    ["-z", "x", "-y"],                // 113
    ["y", "z", "x"],                  // 114
    ["-y", "z", "-x"],                // 115
    ["y", "-z", "-x"],                // 116
    ["-y", "-z", "x"],                // 117
    ["z", "x+1/2", "y+1/2"],          // 118
    ["z", "-x+1/2", "-y+1/2"],        // 119
    ["-z", "-x+1/2", "y+1/2"],        // 120
    ["-z", "x+1/2", "-y+1/2"],        // 121
    ["y", "z+1/2", "x+1/2"],          // 122
    ["-y", "z+1/2", "-x+1/2"],        // 123
    ["y", "-z+1/2", "-x+1/2"],        // 124
    ["-y", "-z+1/2", "x+1/2"],        // 125
    ["z+1/2", "x", "y+1/2"],          // 126
    ["z+1/2", "-x", "-y+1/2"],        // 127
    ["-z+1/2", "-x", "y+1/2"],        // 128
    ["-z+1/2", "x", "-y+1/2"],        // 129
    ["y+1/2", "z", "x+1/2"],          // 130
    ["-y+1/2", "z", "-x+1/2"],        // 131
    ["y+1/2", "-z", "-x+1/2"],        // 132
    ["-y+1/2", "-z", "x+1/2"],        // 133
    ["z+1/2", "x+1/2", "y"],          // 134
    ["z+1/2", "-x+1/2", "-y"],        // 135
    ["-z+1/2", "-x+1/2", "y"],        // 136
    ["-z+1/2", "x+1/2", "-y"],        // 137
    ["y+1/2", "z+1/2", "x"],          // 138
    ["-y+1/2", "z+1/2", "-x"],        // 139
    ["y+1/2", "-z+1/2", "-x"],        // 140
    ["-y+1/2", "-z+1/2", "x"],        // 141
    ["z+1/2", "x+1/2", "y+1/2"],      // 142
    ["z+1/2", "-x+1/2", "-y+1/2"],    // 143
    ["-z+1/2", "-x+1/2", "y+1/2"],    // 144
    ["-z+1/2", "x+1/2", "-y+1/2"],    // 145
    ["y+1/2", "z+1/2", "x+1/2"],      // 146
    ["-y+1/2", "z+1/2", "-x+1/2"],    // 147
    ["y+1/2", "-z+1/2", "-x+1/2"],    // 148
    ["-y+1/2", "-z+1/2", "x+1/2"],    // 149
    ["z", "-x", "-y+1/2"],            // 150
    ["-z", "-x+1/2", "y"],            // 151
    ["-z+1/2", "x", "-y"],            // 152
    ["-y+1/2", "z", "-x"],            // 153
    ["y", "-z", "-x+1/2"],            // 154
    ["-y", "-z+1/2", "x"],            // 155
    ["y", "x", "-z+1/2"],             // 156
    ["-x+1/2", "y", "-z+3/4"],        // 157
    ["x", "-y+1/2", "-z+1/4"],        // 158
    ["-x", "y+1/2", "-z+1/4"],        // 159
    ["x+1/2", "-y", "-z+3/4"],        // 160
    ["x", "x-y", "-z+1/3"],           // 161
    ["x", "x-y", "-z+2/3"],           // 162
    ["-z", "y", "x"],                 // 163
    ["x", "z", "-y"],                 // 164
    ["z", "-y", "x"],                 // 165
    ["-x", "-z", "-y"],               // 166
    ["z", "y", "-x"],                 // 167
    ["-x", "z", "y"],                 // 168
    ["-z", "-y", "-x"],               // 169
    ["x", "-z", "y"],                 // 170
    ["-z+1/2", "y+1/2", "x+1/2"],     // 171
    ["x+1/2", "z+1/2", "-y+1/2"],     // 172
    ["z+1/2", "-y+1/2", "x+1/2"],     // 173
    ["-x+1/2", "-z+1/2", "-y+1/2"],   // 174
    ["z+1/2", "y+1/2", "-x+1/2"],     // 175
    ["-x+1/2", "z+1/2", "y+1/2"],     // 176
    ["-z+1/2", "-y+1/2", "-x+1/2"],   // 177
    ["x+1/2", "-z+1/2", "y+1/2"],     // 178
    ["y", "x+1/2", "-z+1/2"],         // 179
    ["-y", "-x+1/2", "-z+1/2"],       // 180
    ["-y", "x+1/2", "z+1/2"],         // 181
    ["-z", "y+1/2", "x+1/2"],         // 182
    ["y", "-x+1/2", "z+1/2"],         // 183
    ["x", "z+1/2", "-y+1/2"],         // 184
    ["z", "-y+1/2", "x+1/2"],         // 185
    ["-x", "-z+1/2", "-y+1/2"],       // 186
    ["z", "y+1/2", "-x+1/2"],         // 187
    ["-x", "z+1/2", "y+1/2"],         // 188
    ["-z", "-y+1/2", "-x+1/2"],       // 189
    ["x", "-z+1/2", "y+1/2"],         // 190
    ["y+1/2", "x", "-z+1/2"],         // 191
    ["-y+1/2", "-x", "-z+1/2"],       // 192
    ["-y+1/2", "x", "z+1/2"],         // 193
    ["-z+1/2", "y", "x+1/2"],         // 194
    ["y+1/2", "-x", "z+1/2"],         // 195
    ["x+1/2", "z", "-y+1/2"],         // 196
    ["z+1/2", "-y", "x+1/2"],         // 197
    ["-x+1/2", "-z", "-y+1/2"],       // 198
    ["z+1/2", "y", "-x+1/2"],         // 199
    ["-x+1/2", "z", "y+1/2"],         // 200
    ["-z+1/2", "-y", "-x+1/2"],       // 201
    ["x+1/2", "-z", "y+1/2"],         // 202
    ["y+1/2", "x+1/2", "-z"],         // 203
    ["-y+1/2", "-x+1/2", "-z"],       // 204
    ["-z+1/2", "y+1/2", "x"],         // 205
    ["x+1/2", "z+1/2", "-y"],         // 206
    ["z+1/2", "-y+1/2", "x"],         // 207
    ["-x+1/2", "-z+1/2", "-y"],       // 208
    ["z+1/2", "y+1/2", "-x"],         // 209
    ["-x+1/2", "z+1/2", "y"],         // 210
    ["-z+1/2", "-y+1/2", "-x"],       // 211
    ["x+1/2", "-z+1/2", "y"],         // 212
    ["y+3/4", "x+1/4", "-z+3/4"],     // 213
    ["-y+1/4", "-x+1/4", "-z+1/4"],   // 214
    ["-y+3/4", "x+3/4", "z+1/4"],     // 215
    ["-z+3/4", "y+3/4", "x+1/4"],     // 216
    ["y+1/4", "-x+3/4", "z+3/4"],     // 217
    ["x+3/4", "z+1/4", "-y+3/4"],     // 218
    ["z+1/4", "-y+3/4", "x+3/4"],     // 219
    ["-x+1/4", "-z+1/4", "-y+1/4"],   // 220
    ["z+3/4", "y+1/4", "-x+3/4"],     // 221
    ["-x+3/4", "z+3/4", "y+1/4"],     // 222
    ["-z+1/4", "-y+1/4", "-x+1/4"],   // 223
    ["x+1/4", "-z+3/4", "y+3/4"],     // 224
    ["y+3/4", "x+3/4", "-z+1/4"],     // 225
    ["-y+1/4", "-x+3/4", "-z+3/4"],   // 226
    ["-y+3/4", "x+1/4", "z+3/4"],     // 227
    ["-z+3/4", "y+1/4", "x+3/4"],     // 228
    ["y+1/4", "-x+1/4", "z+1/4"],     // 229
    ["x+3/4", "z+3/4", "-y+1/4"],     // 230
    ["z+1/4", "-y+1/4", "x+1/4"],     // 231
    ["-x+1/4", "-z+3/4", "-y+3/4"],   // 232
    ["z+3/4", "y+3/4", "-x+1/4"],     // 233
    ["-x+3/4", "z+1/4", "y+3/4"],     // 234
    ["-z+1/4", "-y+3/4", "-x+3/4"],   // 235
    ["x+1/4", "-z+1/4", "y+1/4"],     // 236
    ["y+1/4", "x+1/4", "-z+1/4"],     // 237
    ["-y+3/4", "-x+1/4", "-z+3/4"],   // 238
    ["-y+1/4", "x+3/4", "z+3/4"],     // 239
    ["-z+1/4", "y+3/4", "x+3/4"],     // 240
    ["y+3/4", "-x+3/4", "z+1/4"],     // 241
    ["x+1/4", "z+1/4", "-y+1/4"],     // 242
    ["z+3/4", "-y+3/4", "x+1/4"],     // 243
    ["-x+3/4", "-z+1/4", "-y+3/4"],   // 244
    ["z+1/4", "y+1/4", "-x+1/4"],     // 245
    ["-x+1/4", "z+3/4", "y+3/4"],     // 246
    ["-z+3/4", "-y+1/4", "-x+3/4"],   // 247
    ["x+3/4", "-z+3/4", "y+1/4"],     // 248
    ["y+1/4", "x+3/4", "-z+3/4"],     // 249
    ["-y+3/4", "-x+3/4", "-z+1/4"],   // 250
    ["-y+1/4", "x+1/4", "z+1/4"],     // 251
    ["-z+1/4", "y+1/4", "x+1/4"],     // 252
    ["y+3/4", "-x+1/4", "z+3/4"],     // 253
    ["x+1/4", "z+3/4", "-y+3/4"],     // 254
    ["z+3/4", "-y+1/4", "x+3/4"],     // 255
    ["-x+3/4", "-z+3/4", "-y+1/4"],   // 256
    ["z+1/4", "y+3/4", "-x+3/4"],     // 257
    ["-x+1/4", "z+1/4", "y+1/4"],     // 258
    ["-z+3/4", "-y+3/4", "-x+1/4"],   // 259
    ["x+3/4", "-z+1/4", "y+3/4"],     // 260
    ["y+3/4", "x+1/4", "-z+1/4"],     // 261
    ["-y+3/4", "-x+3/4", "-z+3/4"],   // 262
    ["-y+1/4", "x+3/4", "z+1/4"],     // 263
    ["-z+1/4", "y+3/4", "x+1/4"],     // 264
    ["y+1/4", "-x+1/4", "z+3/4"],     // 265
    ["x+3/4", "z+1/4", "-y+1/4"],     // 266
    ["z+1/4", "-y+1/4", "x+3/4"],     // 267
    ["-x+3/4", "-z+3/4", "-y+3/4"],   // 268
    ["z+3/4", "y+1/4", "-x+1/4"],     // 269
    ["-x+1/4", "z+3/4", "y+1/4"],     // 270
    ["-z+3/4", "-y+3/4", "-x+3/4"],   // 271
    ["x+1/4", "-z+1/4", "y+3/4"],     // 272
];

pub(super) static SPACEGROUPS: Map<&'static str, &'static [u16]> = phf_map! {
    "P 1" => &[0],
    "P -1" => &[0, 1],
    "P 1 2 1" => &[0, 2],
    "P 1 21 1" => &[0, 3],
    "C 1 2 1" => &[0, 2, 4, 5],
    "I 1 2 1" => &[0, 2, 6, 7],
    "P 2 2 2" => &[0, 8, 2, 9],
    "P 2 2 21" => &[0, 10, 11, 9],
    "P 21 21 2" => &[0, 8, 5, 12],
    "P 21 21 21" => &[0, 13, 14, 12],
    "C 2 2 21" => &[0, 10, 11, 9, 4, 15, 7, 12],
    "C 2 2 2" => &[0, 8, 2, 9, 4, 16, 5, 12],
    "F 2 2 2" => &[0, 8, 2, 9, 17, 18, 14, 19, 20, 13, 21, 22, 4, 16, 5, 12],
    "I 2 2 2" => &[0, 8, 2, 9, 6, 15, 7, 23],
    "I 21 21 21" => &[0, 24, 25, 26, 6, 13, 14, 12],
    "P 4" => &[0, 8, 27, 28],
    "P 41" => &[0, 10, 29, 30],
    "P 42" => &[0, 8, 31, 32],
    "P 43" => &[0, 10, 33, 34],
    "I 4" => &[0, 8, 27, 28, 6, 15, 35, 36],
    "I 41" => &[0, 15, 37, 38, 6, 8, 39, 40],
    "P 4 2 2" => &[0, 8, 27, 28, 2, 9, 41, 42],
    "P 4 21 2" => &[0, 8, 43, 44, 5, 12, 41, 42],
    "P 41 2 2" => &[0, 10, 29, 30, 2, 26, 45, 46],
    "P 41 21 2" => &[0, 10, 47, 48, 49, 50, 41, 51],
    "P 42 2 2" => &[0, 31, 2, 8, 51, 156, 32, 9],
    "P 42 21 2" => &[0, 8, 35, 36, 7, 23, 41, 42],
    "P 43 2 2" => &[0, 10, 33, 34, 2, 26, 52, 53],
    "P 43 21 2" => &[0, 10, 54, 55, 56, 57, 41, 51],
    "I 4 2 2" => &[0, 8, 27, 28, 2, 9, 41, 42, 6, 15, 35, 36, 7, 23, 58, 59],
    "I 41 2 2" => &[0, 37, 157, 15, 42, 58, 38, 158, 6, 39, 159, 8, 59, 41, 40, 160],
    "P 3" => &[0, 60, 61],
    "P 31" => &[0, 62, 63],
    "P 32" => &[0, 64, 65],
    "R 3" => &[0, 60, 61, 66, 67, 68, 69, 70, 71],
    "P 3 1 2" => &[0, 60, 61, 42, 72, 73],
    "P 3 2 1" => &[0, 60, 61, 41, 74, 75],
    "P 31 1 2" => &[0, 62, 63, 76, 77, 73],
    "P 31 2 1" => &[0, 62, 63, 41, 78, 79],
    "P 32 1 2" => &[0, 64, 65, 80, 81, 73],
    "P 32 2 1" => &[0, 64, 65, 41, 82, 83],
    "R 3 2" => &[0, 60, 61, 41, 74, 75, 66, 67, 68, 84, 85, 86, 69, 70, 71, 87, 88, 89],
    "P 6" => &[0, 60, 61, 8, 90, 91],
    "P 61" => &[0, 62, 63, 10, 92, 93],
    "P 65" => &[0, 64, 65, 10, 94, 95],
    "P 62" => &[0, 64, 65, 8, 96, 97],
    "P 64" => &[0, 62, 63, 8, 98, 99],
    "P 63" => &[0, 60, 61, 10, 100, 101],
    "P 6 2 2" => &[0, 60, 61, 8, 90, 91, 41, 74, 75, 42, 72, 73],
    "P 61 2 2" => &[0, 62, 63, 10, 92, 93, 102, 74, 83, 103, 104, 105],
    "P 65 2 2" => &[0, 64, 65, 10, 94, 95, 106, 74, 79, 107, 104, 108],
    "P 62 2 2" => &[0, 64, 8, 106, 65, 96, 79, 76, 74, 97, 161, 72],
    "P 64 2 2" => &[0, 62, 8, 102, 63, 98, 83, 80, 74, 99, 162, 72],
    "P 63 2 2" => &[0, 60, 61, 10, 100, 101, 41, 74, 75, 51, 104, 109],
    "P 2 3" => &[0, 8, 2, 9, 110, 111, 112, 113, 114, 115, 116, 117],
    "F 2 3" => &[
        0, 8, 2, 9, 110, 111, 112, 113, 114, 115, 116, 117, 17, 18, 14, 19, 118, 119, 120, 121, 122,
        123, 124, 125, 20, 13, 21, 22, 126, 127, 128, 129, 130, 131, 132, 133, 4, 16, 5, 12, 134,
        135, 136, 137, 138, 139, 140, 141,
    ],
    "I 2 3" => &[
        0, 8, 2, 9, 110, 111, 112, 113, 114, 115, 116, 117, 6, 15, 7, 23, 142, 143, 144, 145, 146,
        147, 148, 149,
    ],
    "P 21 3" => &[0, 13, 14, 12, 110, 135, 128, 121, 114, 123, 140, 133],
    "I 21 3" => &[
        0, 13, 14, 12, 110, 135, 128, 121, 114, 123, 140, 133, 6, 24, 25, 26, 142, 150, 151, 152,
        146, 153, 154, 155,
    ],
    "P 4 3 2" => &[
        0, 8, 2, 110, 41, 9, 112, 42, 113, 27, 111, 114, 163, 28, 164, 117, 165, 166, 115, 167, 168,
        116, 169, 170,
    ],
    "P 42 3 2" => &[
        0, 8, 2, 110, 58, 9, 112, 59, 113, 35, 111, 114, 171, 36, 172, 117, 173, 174, 115, 175, 176,
        116, 177, 178,
    ],
    "F 4 3 2" => &[
        0, 8, 2, 110, 41, 9, 112, 42, 113, 27, 111, 114, 163, 28, 164, 117, 165, 166, 115, 167, 168,
        116, 169, 170, 17, 18, 14, 118, 179, 19, 120, 180, 121, 181, 119, 122, 182, 183, 184, 125,
        185, 186, 123, 187, 188, 124, 189, 190, 20, 13, 21, 126, 191, 22, 128, 192, 129, 193, 127,
        130, 194, 195, 196, 133, 197, 198, 131, 199, 200, 132, 201, 202, 4, 16, 5, 134, 203, 12,
        136, 204, 137, 43, 135, 138, 205, 44, 206, 141, 207, 208, 139, 209, 210, 140, 211, 212,
    ],
    "F 41 3 2" => &[
        0, 18, 5, 110, 213, 22, 120, 214, 137, 215, 127, 114, 216, 217, 218, 125, 219, 220, 139,
        221, 222, 132, 223, 224, 17, 8, 21, 118, 225, 12, 112, 226, 129, 227, 135, 122, 228, 229,
        230, 117, 231, 232, 131, 233, 234, 140, 235, 236, 20, 16, 14, 126, 237, 9, 136, 238, 121,
        239, 111, 130, 240, 241, 242, 141, 243, 244, 123, 245, 246, 116, 247, 248, 4, 13, 2, 134,
        249, 19, 128, 250, 113, 251, 119, 138, 252, 253, 254, 133, 255, 256, 115, 257, 258, 124,
        259, 260,
    ],
    "I 4 3 2" => &[
        0, 8, 2, 110, 41, 9, 112, 42, 113, 27, 111, 114, 163, 28, 164, 117, 165, 166, 115, 167, 168,
        116, 169, 170, 6, 15, 7, 142, 58, 23, 144, 59, 145, 35, 143, 146, 171, 36, 172, 149, 173,
        174, 147, 175, 176, 148, 177, 178,
    ],
    "P 43 3 2" => &[
        0, 13, 14, 110, 249, 12, 128, 214, 121, 227, 135, 114, 228, 241, 254, 133, 243, 220, 123,
        257, 234, 140, 223, 248,
    ],
    "P 41 3 2" => &[
        0, 13, 14, 110, 261, 12, 128, 262, 121, 263, 135, 114, 264, 265, 266, 133, 267, 268, 123,
        269, 270, 140, 271, 272,
    ],
    "I 41 3 2" => &[
        0, 13, 14, 110, 261, 12, 128, 262, 121, 263, 135, 114, 264, 265, 266, 133, 267, 268, 123,
        269, 270, 140, 271, 272, 6, 24, 25, 142, 249, 26, 151, 214, 152, 227, 150, 146, 228, 241,
        254, 155, 243, 220, 153, 257, 234, 154, 223, 248,
    ],
};

pub(super) static ALIASES: Map<&'static str, &'static str> = phf_map! {
    "P1" => "P 1",
    "P-1" => "P -1",
    "P121" => "P 1 2 1",
    "P1211" => "P 1 21 1",
    "C121" => "C 1 2 1",
    "I121" => "I 1 2 1",
    "P222" => "P 2 2 2",
    "P2221" => "P 2 2 21",
    "P21212" => "P 21 21 2",
    "P212121" => "P 21 21 21",
    "C2221" => "C 2 2 21",
    "C222" => "C 2 2 2",
    "F222" => "F 2 2 2",
    "I222" => "I 2 2 2",
    "I212121" => "I 21 21 21",
    "P4" => "P 4",
    "P41" => "P 41",
    "P42" => "P 42",
    "P43" => "P 43",
    "I4" => "I 4",
    "I41" => "I 41",
    "P422" => "P 4 2 2",
    "P4212" => "P 4 21 2",
    "P4122" => "P 41 2 2",
    "P41212" => "P 41 21 2",
    "P4222" => "P 42 2 2",
    "P42212" => "P 42 21 2",
    "P4322" => "P 43 2 2",
    "P43212" => "P 43 21 2",
    "I422" => "I 4 2 2",
    "I4122" => "I 41 2 2",
    "P3" => "P 3",
    "P31" => "P 31",
    "P32" => "P 32",
    "R3" => "R 3",
    "P312" => "P 3 1 2",
    "P321" => "P 3 2 1",
    "P3112" => "P 31 1 2",
    "P3121" => "P 31 2 1",
    "P3212" => "P 32 1 2",
    "P3221" => "P 32 2 1",
    "R32" => "R 3 2",
    "P6" => "P 6",
    "P61" => "P 61",
    "P65" => "P 65",
    "P62" => "P 62",
    "P64" => "P 64",
    "P63" => "P 63",
    "P622" => "P 6 2 2",
    "P6122" => "P 61 2 2",
    "P6522" => "P 65 2 2",
    "P6222" => "P 62 2 2",
    "P6422" => "P 64 2 2",
    "P6322" => "P 63 2 2",
    "P23" => "P 2 3",
    "F23" => "F 2 3",
    "I23" => "I 2 3",
    "P213" => "P 21 3",
    "I213" => "I 21 3",
    "P432" => "P 4 3 2",
    "P4232" => "P 42 3 2",
    "F432" => "F 4 3 2",
    "F4132" => "F 41 3 2",
    "I432" => "I 4 3 2",
    "P4332" => "P 43 3 2",
    "P4132" => "P 41 3 2",
    "I4132" => "I 41 3 2",
    "P2" => "P 1 2 1",
    "P 2" => "P 1 2 1",
    "P21" => "P 1 21 1",
    "P 21" => "P 1 21 1",
    "C2" => "C 1 2 1",
    "C 2" => "C 1 2 1",
    "I2" => "I 1 2 1",
    "I 2" => "I 1 2 1",
    "H3" => "R 3",
    "H 3" => "R 3",
    "H32" => "R 3 2",
    "H 3 2" => "R 3 2",
};
